//! # Integration tests that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `fn linear_program()`
//! * `fn artificial_tableau_form()`
//! * `fn tableau_form()`
pub mod problem_2;
