//! Error types

use thiserror::Error;

/// A puzzle or cage that breaks a structural rule
#[derive(Error, Debug, PartialEq)]
#[error("invalid puzzle: {}", msg)]
pub struct InvalidPuzzle {
    msg: String,
}

impl InvalidPuzzle {
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// Generation parameters that cannot produce a puzzle
#[derive(Error, Debug, PartialEq)]
pub enum GenerateError {
    /// KenKen grid widths must be between 1 and 9
    #[error("invalid grid width {0}: must be between 1 and 9")]
    InvalidWidth(usize),
    /// A SET hand must hold at least 3 and at most 81 cards
    #[error("invalid hand size {0}: must be between 3 and 81")]
    InvalidHandSize(usize),
    /// At least one attempt is needed to produce anything
    #[error("max attempts must be at least 1")]
    InvalidAttempts,
}

/// A cage label that could not be read
#[derive(Error, Debug, PartialEq)]
pub enum ParseClueError {
    /// The label has no characters
    #[error("empty cage label")]
    Empty,
    /// The label does not start with a number
    #[error("invalid cage target in \"{0}\"")]
    InvalidTarget(String),
    /// The label ends with a symbol that is not an operator
    #[error("unknown cage operator '{0}'")]
    UnknownOperator(char),
}
