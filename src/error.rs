//! Error types for the solver

use thiserror::Error;

use crate::direction::Direction;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PuzzleError {
    #[error("invalid board length: expected {expected} symbols, got {got} in '{input}'")]
    InvalidLength {
        expected: usize,
        got: usize,
        input: String,
    },

    #[error("invalid symbol '{symbol}' at position {position} in '{input}'")]
    InvalidSymbol {
        symbol: char,
        position: usize,
        input: String,
    },

    #[error("symbol '{symbol}' appears more than once in '{input}'")]
    DuplicateSymbol { symbol: char, input: String },

    #[error("board '{input}' has no blank")]
    MissingBlank { input: String },

    #[error("illegal move: cannot move blank {direction} from index {blank}")]
    IllegalMove { direction: Direction, blank: usize },

    #[error("invalid solver configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl PuzzleError {
    /// True for every variant raised while parsing a board string.
    pub fn is_invalid_state(&self) -> bool {
        matches!(
            self,
            PuzzleError::InvalidLength { .. }
                | PuzzleError::InvalidSymbol { .. }
                | PuzzleError::DuplicateSymbol { .. }
                | PuzzleError::MissingBlank { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
