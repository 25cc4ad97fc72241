//! Attack predicates for rooks, bishops, and queens.
//!
//! Each predicate scans the occupied cells once, marking the lines they sit
//! on, and fails as soon as a line is hit twice.

use crate::grid::Placement;
use crate::pieces::PieceKind;

/// Marks `line` as occupied, returning true if it already was.
#[inline(always)]
fn mark(seen: &mut [bool], line: usize) -> bool {
    std::mem::replace(&mut seen[line], true)
}

/// True if no row and no column holds more than one piece.
pub fn is_rook_free(placement: &Placement) -> bool {
    let mut rows = vec![false; placement.rows()];
    let mut cols = vec![false; placement.cols()];

    for (row, col) in placement.occupied() {
        if mark(&mut rows, row) || mark(&mut cols, col) {
            return false;
        }
    }
    true
}

/// True if no diagonal and no anti-diagonal holds more than one piece.
///
/// Diagonals are the classes of constant `row - col`, shifted by `cols - 1`
/// into `0..rows + cols - 1`. Anti-diagonals are the classes of constant
/// `row + col`, which share that range.
pub fn is_bishop_free(placement: &Placement) -> bool {
    let lines = placement.rows() + placement.cols() - 1;
    let last_col = placement.cols() - 1;
    let mut diagonals = vec![false; lines];
    let mut anti_diagonals = vec![false; lines];

    for (row, col) in placement.occupied() {
        if mark(&mut diagonals, row + last_col - col) || mark(&mut anti_diagonals, row + col) {
            return false;
        }
    }
    true
}

/// A queen moves like a rook and a bishop combined.
pub fn is_queen_free(placement: &Placement) -> bool {
    is_rook_free(placement) && is_bishop_free(placement)
}

impl PieceKind {
    /// True if no two pieces of this kind on `placement` attack each other.
    pub fn is_non_attacking(self, placement: &Placement) -> bool {
        match self {
            PieceKind::Bishop => is_bishop_free(placement),
            PieceKind::Rook => is_rook_free(placement),
            PieceKind::Queen => is_queen_free(placement),
        }
    }
}
