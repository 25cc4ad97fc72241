//! Brute-force counting engine.
//!
//! Every candidate from the chosen enumerator is classified by the attack
//! predicates. Queen-free candidates can additionally be registered in a
//! `FundamentalSolutions` set, which keeps one representative per symmetry
//! class. All counters and the set live for one board only.

use std::time::Instant;

use log::{debug, info};
use rustc_hash::FxHashSet;

use crate::attacks::{is_bishop_free, is_rook_free};
use crate::config::RunConfig;
use crate::enumerate::Strategy;
use crate::error::{Error, Result};
use crate::grid::{canonical_key, Placement};
use crate::pieces::Board;
use crate::report::BoardReport;

/// Queen solutions that are distinct under rotation and reflection.
///
/// Keeps the first placement seen from each symmetry class, in registration
/// order, plus the canonical key of every class for constant-time lookup.
#[derive(Clone, Debug, Default)]
pub struct FundamentalSolutions {
    solutions: Vec<Placement>,
    seen_classes: FxHashSet<Placement>,
}

impl FundamentalSolutions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `placement` if no registered solution is equal to it or to one of
    /// its symmetry images. Returns true if it was added.
    pub fn try_register(&mut self, placement: &Placement) -> bool {
        if !self.seen_classes.insert(canonical_key(placement)) {
            return false;
        }
        self.solutions.push(placement.clone());
        true
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Registered solutions in the order they were first seen.
    pub fn iter(&self) -> impl Iterator<Item = &Placement> {
        self.solutions.iter()
    }

    pub fn into_vec(self) -> Vec<Placement> {
        self.solutions
    }
}

/// Which counts to collect for each board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metrics {
    pub bishops: bool,
    pub rooks: bool,
    pub queens: bool,
    /// Deduplicate queen solutions by symmetry (square boards only).
    pub fundamental: bool,
}

impl Metrics {
    /// Queens plus fundamental solutions for permutations; all three piece
    /// counts for combinations.
    pub fn for_strategy(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Permutation => Self {
                bishops: false,
                rooks: false,
                queens: true,
                fundamental: true,
            },
            Strategy::Combination => Self {
                bishops: true,
                rooks: true,
                queens: true,
                fundamental: false,
            },
        }
    }
}

/// Enumerates every candidate for one board and tallies the requested counts.
pub fn count_board(strategy: Strategy, board: Board, metrics: Metrics) -> Result<BoardReport> {
    if metrics.fundamental && !board.is_square() {
        return Err(Error::NotSquare {
            rows: board.rows,
            cols: board.cols,
            pieces: board.pieces,
            strategy,
        });
    }
    let candidates = strategy.candidates(board)?;

    info!(
        "Counting {}x{} with {} pieces ({} strategy, {} candidates)",
        board.rows,
        board.cols,
        board.pieces,
        strategy,
        strategy
            .candidate_count(board)
            .map_or_else(|| "too many".to_string(), |count| count.to_string())
    );
    let started = Instant::now();

    let check_queens = metrics.queens || metrics.fundamental;
    let check_bishops = metrics.bishops || check_queens;
    let check_rooks = metrics.rooks || check_queens;

    let mut bishops = 0u64;
    let mut rooks = 0u64;
    let mut queens = 0u64;
    let mut fundamental = metrics.fundamental.then(FundamentalSolutions::new);

    for placement in candidates {
        let bishop_free = check_bishops && is_bishop_free(&placement);
        let rook_free = check_rooks && is_rook_free(&placement);

        bishops += u64::from(bishop_free);
        rooks += u64::from(rook_free);

        if check_queens && bishop_free && rook_free {
            queens += 1;
            if let Some(solutions) = fundamental.as_mut() {
                if solutions.try_register(&placement) {
                    debug!(
                        "New fundamental solution #{} for size {}",
                        solutions.len(),
                        board.rows
                    );
                }
            }
        }
    }

    info!(
        "Finished {}x{} in {:.2?}: {} queen arrangements",
        board.rows,
        board.cols,
        started.elapsed(),
        queens
    );

    Ok(BoardReport {
        board,
        bishops: metrics.bishops.then_some(bishops),
        rooks: metrics.rooks.then_some(rooks),
        queens: metrics.queens.then_some(queens),
        fundamental,
    })
}

/// Runs every square board in the configured range, smallest first.
///
/// The configuration is validated up front; boards are counted lazily as the
/// returned iterator is advanced.
pub fn run(config: &RunConfig) -> Result<impl Iterator<Item = Result<BoardReport>>> {
    config.validate()?;
    let RunConfig {
        strategy,
        from,
        to,
        metrics,
    } = *config;

    Ok((from..=to).map(move |size| count_board(strategy, Board::square(size)?, metrics)))
}

/// Finds the fundamental queen solutions of one square board.
pub fn fundamental_solutions(size: usize) -> Result<FundamentalSolutions> {
    let metrics = Metrics {
        bishops: false,
        rooks: false,
        queens: false,
        fundamental: true,
    };
    let report = count_board(Strategy::Permutation, Board::square(size)?, metrics)?;
    Ok(report.fundamental.unwrap_or_default())
}
