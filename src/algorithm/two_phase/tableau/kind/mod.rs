//! # Tableau types: artificial or not
//!
//! A tableau can contain artificial variables. They can be used to find a feasible solution in a
//! two-phase algorithm: the first phase finds a basic feasible solution, the second improves it.
//!
//! The `Tableau` type and algorithm logic in the parent modules is independent of whether a tableau
//! contains artificial variables, or not. This module enables those abstractions.
pub mod artificial;
pub mod non_artificial;

pub use artificial::Artificial;
pub use non_artificial::NonArtificial;

/// The tableau type provides two different ways for the `Tableau` to function, depending on whether
/// artificial variables are included in the problem.
///
/// Each objective row comes with its own marker column. Objective rows are at the top of the
/// tableau and their marker columns at the left; they never take part in the ratio test.
pub trait Kind {
    /// Number of objective rows, which is also the number of marker columns.
    fn nr_objective_rows(&self) -> usize;

    /// Number of artificial variable columns, placed directly left of the right-hand side.
    fn nr_artificial_variables(&self) -> usize;
}
