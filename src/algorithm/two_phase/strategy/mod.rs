//! # Strategies
//!
//! Choices the simplex method leaves open, made through type parameters.
pub mod pivot_rule;
