//! Candidate placement generators.
//!
//! Both enumerators are lazy wrappers over `itertools` adaptors: they hold
//! only the current permutation or subset and build one `Placement` per call
//! to `next`. Cloning an enumerator (or asking a `Strategy` for fresh
//! candidates) restarts the sequence.

use std::fmt;
use std::ops::Range;

use itertools::Itertools;

use crate::error::{Error, Result};
use crate::grid::Placement;
use crate::pieces::Board;

/// Default largest board for the permutation strategy.
const PERMUTATION_DEFAULT_MAX: usize = 10;

/// Largest board the permutation strategy will accept (12! candidates).
const PERMUTATION_SIZE_LIMIT: usize = 12;

/// Default and largest board for the combination strategy (C(64, 8) candidates).
const COMBINATION_SIZE_LIMIT: usize = 8;

/// Largest board area accepted by the combination strategy.
///
/// Every candidate is a full occupancy grid, so the area bounds the work per
/// candidate independently of how many candidates there are.
pub const COMBINATION_CELL_LIMIT: usize = COMBINATION_SIZE_LIMIT * COMBINATION_SIZE_LIMIT;

/// Largest candidate space accepted for an arbitrary combination board.
///
/// Matches the 8x8 board with 8 pieces, the biggest square the combination
/// strategy runs.
pub const COMBINATION_CANDIDATE_LIMIT: u128 = 4_426_165_368;

/// All `size!` placements with one piece per row and column on a
/// `size x size` board, in lexicographic order of the column sequence.
#[derive(Clone, Debug)]
pub struct Permutations {
    columns: itertools::Permutations<Range<usize>>,
}

impl Permutations {
    pub fn new(size: usize) -> Self {
        Self {
            columns: (0..size).permutations(size),
        }
    }
}

impl Iterator for Permutations {
    type Item = Placement;

    #[inline]
    fn next(&mut self) -> Option<Placement> {
        self.columns
            .next()
            .map(|columns| Placement::from_permutation(&columns))
    }
}

/// All placements of `board.pieces` pieces on distinct cells, one per
/// K-subset of the row-major cell indices, in lexicographic subset order.
#[derive(Clone, Debug)]
pub struct Combinations {
    rows: usize,
    cols: usize,
    subsets: itertools::Combinations<Range<usize>>,
}

impl Combinations {
    pub fn new(board: Board) -> Self {
        Self {
            rows: board.rows,
            cols: board.cols,
            subsets: (0..board.cells()).combinations(board.pieces),
        }
    }
}

impl Iterator for Combinations {
    type Item = Placement;

    #[inline]
    fn next(&mut self) -> Option<Placement> {
        let (rows, cols) = (self.rows, self.cols);
        self.subsets
            .next()
            .map(|indices| Placement::from_indices(rows, cols, &indices))
    }
}

/// Which enumerator generates candidate placements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// One piece per row and column on a square board (`Permutations`).
    Permutation,
    /// Any K distinct cells (`Combinations`).
    Combination,
}

impl Strategy {
    /// Upper end of the size range when none is given.
    pub fn default_max_size(self) -> usize {
        match self {
            Strategy::Permutation => PERMUTATION_DEFAULT_MAX,
            Strategy::Combination => COMBINATION_SIZE_LIMIT,
        }
    }

    /// Largest square board this strategy accepts.
    pub fn size_limit(self) -> usize {
        match self {
            Strategy::Permutation => PERMUTATION_SIZE_LIMIT,
            Strategy::Combination => COMBINATION_SIZE_LIMIT,
        }
    }

    /// Number of candidates the strategy produces for `board`, or `None` if it
    /// does not fit in a `u128`.
    pub fn candidate_count(self, board: Board) -> Option<u128> {
        match self {
            Strategy::Permutation => factorial(board.rows),
            Strategy::Combination => binomial(board.cells(), board.pieces),
        }
    }

    /// Checks that this strategy can enumerate `board`.
    pub fn check_board(self, board: Board) -> Result<()> {
        match self {
            Strategy::Permutation => {
                if !board.is_square() || board.pieces != board.rows {
                    return Err(Error::NotSquare {
                        rows: board.rows,
                        cols: board.cols,
                        pieces: board.pieces,
                        strategy: self,
                    });
                }
                if board.rows > PERMUTATION_SIZE_LIMIT {
                    return Err(Error::SizeOutOfRange {
                        size: board.rows,
                        max: PERMUTATION_SIZE_LIMIT,
                        strategy: self,
                    });
                }
            }
            Strategy::Combination => {
                let cells = board.rows.checked_mul(board.cols).unwrap_or(usize::MAX);
                if cells > COMBINATION_CELL_LIMIT {
                    return Err(Error::BoardTooLarge {
                        rows: board.rows,
                        cols: board.cols,
                        limit: COMBINATION_CELL_LIMIT,
                    });
                }
                let candidates = self.candidate_count(board).unwrap_or(u128::MAX);
                if candidates > COMBINATION_CANDIDATE_LIMIT {
                    return Err(Error::TooManyCandidates {
                        rows: board.rows,
                        cols: board.cols,
                        pieces: board.pieces,
                        candidates,
                        limit: COMBINATION_CANDIDATE_LIMIT,
                    });
                }
            }
        }
        Ok(())
    }

    /// A fresh candidate sequence for `board`.
    pub fn candidates(self, board: Board) -> Result<Candidates> {
        self.check_board(board)?;
        Ok(match self {
            Strategy::Permutation => Candidates::Permutation(Permutations::new(board.rows)),
            Strategy::Combination => Candidates::Combination(Combinations::new(board)),
        })
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Permutation => f.write_str("permutation"),
            Strategy::Combination => f.write_str("combination"),
        }
    }
}

/// Candidate placements from either enumerator.
#[derive(Clone, Debug)]
pub enum Candidates {
    Permutation(Permutations),
    Combination(Combinations),
}

impl Iterator for Candidates {
    type Item = Placement;

    #[inline]
    fn next(&mut self) -> Option<Placement> {
        match self {
            Candidates::Permutation(permutations) => permutations.next(),
            Candidates::Combination(combinations) => combinations.next(),
        }
    }
}

fn factorial(n: usize) -> Option<u128> {
    (1..=n as u128).try_fold(1u128, |product, factor| product.checked_mul(factor))
}

/// C(n, k) computed incrementally; each partial product is itself a binomial
/// coefficient, so the division is exact.
fn binomial(n: usize, k: usize) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k) as u128;
    let n = n as u128;
    (0..k).try_fold(1u128, |acc, i| Some(acc.checked_mul(n - i)? / (i + 1)))
}
