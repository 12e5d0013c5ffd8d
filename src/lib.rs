//! # Advent of Code with linear programming
//!
//! Puzzles are solved with a small dense two-phase simplex solver, following the Simplex Method as
//! described in the book Combinatorial Optimization by Christos H. Papadimitriou and Kenneth
//! Steiglitz. Integer programs are solved by branch and bound on top of it.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod puzzle;

#[cfg(test)]
mod tests;
