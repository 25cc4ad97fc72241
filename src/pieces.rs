//! Piece kinds and board dimensions.

use std::fmt;

use crate::error::{Error, Result};

/// A board cell as `(row, column)`, zero-based from the top-left corner.
pub type Coord = (usize, usize);

/// The chess pieces whose non-attacking arrangements are counted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    /// Attacks along both diagonals.
    Bishop,
    /// Attacks along its row and column.
    Rook,
    /// Attacks like a rook and a bishop combined.
    Queen,
}

impl PieceKind {
    pub const ALL: [PieceKind; 3] = [PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen];
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
        };
        f.write_str(name)
    }
}

/// Board dimensions plus the number of pieces to place.
///
/// - `rows`: M, number of rows
/// - `cols`: N, number of columns
/// - `pieces`: K, pieces per placement (at most `rows * cols`)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    pub rows: usize,
    pub cols: usize,
    pub pieces: usize,
}

impl Board {
    /// Creates a validated board.
    pub fn new(rows: usize, cols: usize, pieces: usize) -> Result<Self> {
        let fits = rows
            .checked_mul(cols)
            .is_some_and(|cells| (1..=cells).contains(&pieces));
        if !fits {
            return Err(Error::InvalidBoard { rows, cols, pieces });
        }
        Ok(Self { rows, cols, pieces })
    }

    /// The `size x size` board carrying `size` pieces.
    pub fn square(size: usize) -> Result<Self> {
        Self::new(size, size, size)
    }

    #[inline]
    pub fn cells(&self) -> usize {
        self.rows * self.cols
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }
}
