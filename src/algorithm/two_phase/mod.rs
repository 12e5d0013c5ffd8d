//! # The Simplex algorithm
//!
//! This module contains all data structures and logic specific to the simplex algorithm. The
//! algorithm is implemented as described in chapters 2 and 4 of Combinatorial Optimization, a book
//! by Christos H. Papadimitriou and Kenneth Steiglitz.
//!
//! When the origin is not a basic feasible solution, a first phase minimizes the sum of artificial
//! variables to find one. The second phase optimizes the real objective from there.
use log::{debug, trace};

use crate::algorithm::{SolveError, SolveRelaxation};
use crate::algorithm::two_phase::phase_one::{Rank, RankedFeasibilityResult};
use crate::algorithm::two_phase::strategy::pivot_rule::{MostNegative, PivotRule};
use crate::algorithm::two_phase::tableau::Tableau;
use crate::algorithm::two_phase::tableau::kind::{Artificial, Kind, NonArtificial};
use crate::data::linear_program::LinearProgram;
use crate::data::linear_program::elements::Objective;
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::Real;

pub mod phase_one;
pub mod phase_two;
pub mod strategy;
pub mod tableau;


impl<F: Real> SolveRelaxation<F> for LinearProgram<F> {
    fn solve_relaxation(&self) -> Result<Solution<F>, SolveError> {
        // Default choice
        type PR = MostNegative;

        self.solve_relaxation_with::<PR>()
    }

    fn solve_relaxation_with<PR: PivotRule>(&self) -> Result<Solution<F>, SolveError> {
        debug!(
            "Solving a program with {} variables and {} constraints",
            self.nr_variables(), self.nr_constraints(),
        );

        let mut tableau = if self.needs_artificial_variables() {
            let artificial_tableau = Tableau::<_, Artificial>::new(self);
            match phase_one::primal::<_, PR>(artificial_tableau)? {
                RankedFeasibilityResult::Feasible { tableau, rank, .. } => {
                    let redundant_rows = match rank {
                        Rank::Full => Vec::new(),
                        Rank::Deficient(rows) => rows,
                    };
                    Tableau::<_, NonArtificial>::from_artificial(tableau, &redundant_rows)
                },
                RankedFeasibilityResult::Infeasible { .. } => return Err(SolveError::Infeasible),
            }
        } else {
            Tableau::<_, NonArtificial>::new(self)
        };

        let assignments = phase_two::primal::<_, PR>(&mut tableau)?;
        // The tableau maximizes, the value is reported in the direction of the problem
        let objective_value = self.objective().sign::<F>() * tableau.objective_function_value();
        debug!("Optimal objective value {}", objective_value);

        Ok(Solution::new(objective_value, assignments))
    }
}

/// Maximize a linear objective.
///
/// # Arguments
///
/// * `cost`: One coefficient per variable.
/// * `less`, `equal`, `greater`: Constraint rows of the respective type. Each row holds one
/// coefficient per variable, followed by the right-hand side.
///
/// # Return value
///
/// The optimum, or whether the problem is infeasible or unbounded.
///
/// # Panics
///
/// If a row doesn't have exactly one more element than the cost vector.
pub fn maximise<F: Real>(
    cost: &[F],
    less: &[Vec<F>],
    equal: &[Vec<F>],
    greater: &[Vec<F>],
) -> Result<Solution<F>, SolveError> {
    LinearProgram::from_rows(Objective::Maximize, cost, less, equal, greater).solve_relaxation()
}

/// Minimize a linear objective.
///
/// The program is solved by maximizing the negated objective, so the result is exactly
/// `maximise` of the negated cost, with the objective value negated.
///
/// See `maximise` for the arguments.
pub fn minimise<F: Real>(
    cost: &[F],
    less: &[Vec<F>],
    equal: &[Vec<F>],
    greater: &[Vec<F>],
) -> Result<Solution<F>, SolveError> {
    LinearProgram::from_rows(Objective::Minimize, cost, less, equal, greater).solve_relaxation()
}

/// Pivot until the top objective row of the tableau has no negative relative cost left.
///
/// While calling this method, the tableau should be in a basic feasible solution state: there is
/// a basis, and all constraint values are non-negative.
///
/// # Return value
///
/// The number of pivots made, or `SolveError::Unbounded` if a column could enter the basis without
/// any row limiting it.
pub(crate) fn primal<F, K, PR>(tableau: &mut Tableau<F, K>) -> Result<usize, SolveError>
where
    F: Real,
    K: Kind,
    PR: PivotRule,
{
    let mut rule = PR::new();
    let mut nr_pivots = 0;
    loop {
        match rule.select_primal_pivot_column(tableau) {
            Some(column) => match tableau.select_primal_pivot_row(column) {
                Some(row) => {
                    tableau.pivot(row, column);
                    nr_pivots += 1;
                    trace!(
                        "Pivot {} on ({}, {}), objective value {}\n{}",
                        nr_pivots, row, column, tableau.objective_function_value(), tableau,
                    );
                },
                None => {
                    debug!("Column {} can enter the basis without limit", column);
                    break Err(SolveError::Unbounded)
                },
            },
            None => break Ok(nr_pivots),
        }
    }
}
