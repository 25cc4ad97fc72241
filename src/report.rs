//! Console output for finished boards.

use std::fmt;

use crate::grid::format_placement;
use crate::pieces::{Board, PieceKind};
use crate::solver::FundamentalSolutions;

const RULE: &str = "-------------------";

/// Counts collected for one board. A `None` count was not requested.
#[derive(Clone, Debug)]
pub struct BoardReport {
    pub board: Board,
    pub bishops: Option<u64>,
    pub rooks: Option<u64>,
    pub queens: Option<u64>,
    pub fundamental: Option<FundamentalSolutions>,
}

impl BoardReport {
    /// Counts in `PieceKind::ALL` order.
    pub fn counts(&self) -> [Option<u64>; 3] {
        [self.bishops, self.rooks, self.queens]
    }

    pub fn fundamental_count(&self) -> Option<usize> {
        self.fundamental.as_ref().map(FundamentalSolutions::len)
    }
}

/// Writes the header and one line per requested count:
///
/// ```text
/// N=4, M=4, K=4
/// -------------------
/// Queen NAAs: 2
/// Fundamental Solutions: 1
/// ```
impl fmt::Display for BoardReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Board { rows, cols, pieces } = self.board;
        writeln!(f, "N={cols}, M={rows}, K={pieces}")?;
        writeln!(f, "{RULE}")?;
        for (kind, count) in PieceKind::ALL.into_iter().zip(self.counts()) {
            if let Some(count) = count {
                writeln!(f, "{kind} NAAs: {count}")?;
            }
        }
        if let Some(count) = self.fundamental_count() {
            writeln!(f, "Fundamental Solutions: {count}")?;
        }
        Ok(())
    }
}

/// Formats every fundamental solution of a board, numbered from 1.
pub fn format_solutions(size: usize, solutions: &FundamentalSolutions) -> String {
    let mut output = format!(
        "N={size}: {} fundamental solutions\n",
        solutions.len()
    );
    for (i, solution) in solutions.iter().enumerate() {
        output.push_str(&format!("\nSolution {}:\n", i + 1));
        output.push_str(&format_placement(solution));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Placement;

    fn board(size: usize) -> Board {
        Board::square(size).unwrap()
    }

    #[test]
    fn test_permutation_report_format() {
        let mut fundamental = FundamentalSolutions::new();
        fundamental.try_register(&Placement::from_permutation(&[1, 3, 0, 2]));
        let report = BoardReport {
            board: board(4),
            bishops: None,
            rooks: None,
            queens: Some(2),
            fundamental: Some(fundamental),
        };
        assert_eq!(
            report.to_string(),
            "N=4, M=4, K=4\n-------------------\nQueen NAAs: 2\nFundamental Solutions: 1\n"
        );
    }

    #[test]
    fn test_combination_report_format() {
        let report = BoardReport {
            board: board(3),
            bishops: Some(26),
            rooks: Some(6),
            queens: Some(0),
            fundamental: None,
        };
        assert_eq!(
            report.to_string(),
            "N=3, M=3, K=3\n-------------------\nBishop NAAs: 26\nRook NAAs: 6\nQueen NAAs: 0\n"
        );
    }

    #[test]
    fn test_header_orders_columns_rows_pieces() {
        let report = BoardReport {
            board: Board::new(2, 3, 4).unwrap(),
            bishops: None,
            rooks: None,
            queens: None,
            fundamental: None,
        };
        assert_eq!(report.to_string(), "N=3, M=2, K=4\n-------------------\n");
    }

    #[test]
    fn test_format_solutions_numbers_boards() {
        let mut solutions = FundamentalSolutions::new();
        solutions.try_register(&Placement::from_permutation(&[0]));
        assert_eq!(
            format_solutions(1, &solutions),
            "N=1: 1 fundamental solutions\n\nSolution 1:\nQ\n"
        );
    }
}
