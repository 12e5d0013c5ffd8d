//! # Puzzles
//!
//! Each day of the calendar is a type implementing `Day`. A day parses its textual input, turns
//! it into whatever the solvers in this crate need, and reports the answer as a string.
use std::fmt::{Display, Formatter, Result as FormatResult};

pub use error::PuzzleError;

pub mod day10;
mod error;

/// A single day of puzzles, consisting of two parts.
pub trait Day {
    /// Number of the day in the calendar.
    fn number(&self) -> u8;

    /// Solve the first part for the given input.
    fn part_one(&self, input: &str) -> Result<String, PuzzleError>;

    /// Solve the second part for the given input.
    fn part_two(&self, input: &str) -> Result<String, PuzzleError>;

    /// Example inputs from the puzzle description, with their answers.
    fn examples(&self, part: Part) -> &'static [Example];

    /// Solve one of the parts.
    fn solve(&self, part: Part, input: &str) -> Result<String, PuzzleError> {
        match part {
            Part::One => self.part_one(input),
            Part::Two => self.part_two(input),
        }
    }
}

/// Example input with the expected answer.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Example {
    /// Puzzle input, as it would appear in an input file.
    pub input: &'static str,
    /// Expected answer.
    pub answer: &'static str,
}

/// Each day has two parts; the second one is unlocked by solving the first.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Part {
    One,
    Two,
}

impl Part {
    /// Both parts, in order.
    pub const ALL: [Part; 2] = [Part::One, Part::Two];
}

impl TryFrom<u8> for Part {
    type Error = PuzzleError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Part::One),
            2 => Ok(Part::Two),
            other => Err(PuzzleError::InvalidPart(other)),
        }
    }
}

impl Display for Part {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        f.write_str(match self {
            Part::One => "part one",
            Part::Two => "part two",
        })
    }
}

/// Look up a day by its number.
///
/// # Return value
///
/// The day, or `None` if it hasn't been implemented.
pub fn find(number: u8) -> Option<Box<dyn Day>> {
    match number {
        10 => Some(Box::new(day10::Factory)),
        _ => None,
    }
}

/// Prepare raw input for solving: line endings become `\n` and trailing whitespace is removed.
pub fn normalize_input(raw: &str) -> String {
    raw.replace("\r\n", "\n").trim_end().to_owned()
}

#[cfg(test)]
mod test {
    use crate::puzzle::{find, normalize_input, Part, PuzzleError};

    #[test]
    fn parts() {
        assert_eq!(Part::try_from(1), Ok(Part::One));
        assert_eq!(Part::try_from(2), Ok(Part::Two));
        assert!(matches!(Part::try_from(3), Err(PuzzleError::InvalidPart(3))));
    }

    #[test]
    fn registry() {
        assert_eq!(find(10).map(|day| day.number()), Some(10));
        assert!(find(11).is_none());
    }

    #[test]
    fn input_normalization() {
        assert_eq!(normalize_input("a\r\nb\r\n\r\n  "), "a\nb");
        assert_eq!(normalize_input("a\nb\n"), "a\nb");
    }
}
