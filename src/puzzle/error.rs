use std::num::ParseIntError;

use thiserror::Error;

use crate::algorithm::SolveError;

/// Reasons a puzzle can't be solved.
#[derive(Error, Debug, PartialEq)]
pub enum PuzzleError {
    /// The input doesn't have the expected format.
    #[error("malformed input: {0}")]
    Malformed(String),
    /// A number in the input couldn't be parsed.
    #[error("invalid number: {0}")]
    Number(#[from] ParseIntError),
    /// Something is wrong with a specific line.
    #[error("line {line}: {source}")]
    AtLine {
        /// One-based line number.
        line: usize,
        /// What is wrong with it.
        source: Box<PuzzleError>,
    },
    /// The input is well-formed, but has no solution.
    #[error("the puzzle has no solution")]
    Unsolvable,
    /// Solving the optimization problem failed.
    #[error(transparent)]
    Solve(#[from] SolveError),
    /// Days have two parts.
    #[error("there is no part {0}, only 1 and 2")]
    InvalidPart(u8),
}

impl PuzzleError {
    /// Attach a one-based line number to an error.
    pub fn at_line(self, line: usize) -> Self {
        PuzzleError::AtLine { line, source: Box::new(self) }
    }
}
