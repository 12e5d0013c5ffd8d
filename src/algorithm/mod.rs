//! # Algorithms
use thiserror::Error;

use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::data::linear_program::solution::Solution;

pub mod branch_and_bound;
pub mod two_phase;

/// A problem formulation of which a relaxation can be solved.
///
/// In the case of linear programming, that means that integer constraints are ignored.
pub trait SolveRelaxation<F> {
    /// Solve the relaxed version of this problem with the default pivot rule.
    ///
    /// # Return value
    ///
    /// An optimal solution, or whether the problem is infeasible or unbounded.
    fn solve_relaxation(&self) -> Result<Solution<F>, SolveError>;

    /// Solve the relaxed version of this problem with a specific pivot rule.
    fn solve_relaxation_with<PR: PivotRule>(&self) -> Result<Solution<F>, SolveError>;
}

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// The latter is the `Ok` case of the solve methods; the other two are errors.
#[derive(Error, Clone, Copy, Debug, PartialEq)]
pub enum SolveError {
    /// No point satisfies all constraints.
    #[error("the problem is infeasible")]
    Infeasible,
    /// The objective can be improved without limit.
    #[error("the problem is unbounded")]
    Unbounded,
    /// An integral solution value doesn't fit in an `i64`.
    #[error("solution value {0} can't be represented as an integer")]
    Unrepresentable(f64),
}
