//! Non-Attacking Arrangement Counter Library
//!
//! Counts placements of bishops, rooks, and queens on small boards where no
//! two pieces attack each other, and finds the queen solutions that are
//! distinct under the 8 symmetries of the square.

pub mod attacks;
pub mod config;
pub mod enumerate;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod pieces;
pub mod report;
pub mod solver;

pub use config::RunConfig;
pub use enumerate::Strategy;
pub use error::{Error, Result};
pub use grid::Placement;
pub use pieces::{Board, PieceKind};
pub use report::BoardReport;
pub use solver::{FundamentalSolutions, Metrics};
