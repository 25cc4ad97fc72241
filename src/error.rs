use thiserror::Error;

use crate::enumerate::Strategy;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Empty size range: {from}..={to}")]
    EmptyRange { from: usize, to: usize },

    #[error("Board size {size} is outside 1..={max} for the {strategy} strategy")]
    SizeOutOfRange {
        size: usize,
        max: usize,
        strategy: Strategy,
    },

    #[error("Invalid board: {rows}x{cols} with {pieces} pieces")]
    InvalidBoard {
        rows: usize,
        cols: usize,
        pieces: usize,
    },

    #[error("The {strategy} strategy needs a square board with one piece per row, got {rows}x{cols} with {pieces} pieces")]
    NotSquare {
        rows: usize,
        cols: usize,
        pieces: usize,
        strategy: Strategy,
    },

    #[error("Board {rows}x{cols} has more than {limit} cells")]
    BoardTooLarge {
        rows: usize,
        cols: usize,
        limit: usize,
    },

    #[error("{rows}x{cols} with {pieces} pieces has {candidates} candidates (limit {limit})")]
    TooManyCandidates {
        rows: usize,
        cols: usize,
        pieces: usize,
        candidates: u128,
        limit: u128,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
