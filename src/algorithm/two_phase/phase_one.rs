//! # Phase one: finding a basic feasible solution
//!
//! The artificial variables are driven out of the basis by minimizing their sum. If that sum can't
//! be made zero, the problem is infeasible.
use log::{debug, trace};

use crate::algorithm::SolveError;
use crate::algorithm::two_phase::primal as pivot_to_optimality;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::algorithm::two_phase::tableau::kind::Artificial;
use crate::data::number_types::Real;

/// Reduces the artificial cost of the basic feasible solution to zero, if possible. In doing so, a
/// basic feasible solution to the standard form linear program is found.
///
/// Infeasibility is decided with a tolerance relative to the initial artificial cost, as the
/// rounding errors accumulated while reducing it are of that order.
///
/// # Arguments
///
/// * `tableau`: Artificial tableau with a valid basis. This basis will typically consist of
/// artificial and slack variables.
///
/// # Return value
///
/// Whether the tableau allows a basic feasible solution without artificial variables. The only
/// possible error is `SolveError::Unbounded`, which can only result from numerical breakdown: the
/// artificial cost is bounded from below by zero.
pub(crate) fn primal<F, PR>(
    mut tableau: Tableau<F, Artificial>,
) -> Result<RankedFeasibilityResult<F>, SolveError>
where
    F: Real,
    PR: PivotRule,
{
    let initial_cost = tableau.artificial_cost();
    let nr_pivots = pivot_to_optimality::<_, _, PR>(&mut tableau)?;
    let artificial_cost = tableau.artificial_cost();
    debug!(
        "Phase one took {} pivots, artificial cost went from {} to {}",
        nr_pivots, initial_cost, artificial_cost,
    );

    if !is_zero_cost(artificial_cost, initial_cost) {
        return Ok(RankedFeasibilityResult::Infeasible { artificial_cost });
    }

    let rows_to_remove = remove_artificial_basis_variables(&mut tableau);
    let rank = if rows_to_remove.is_empty() {
        Rank::Full
    } else {
        debug!("Rows {:?} are redundant", rows_to_remove);
        Rank::Deficient(rows_to_remove)
    };

    Ok(RankedFeasibilityResult::Feasible { tableau, artificial_cost, rank })
}

/// Whether the artificial cost at the end of the first phase counts as zero.
///
/// The tolerance grows with the initial artificial cost, which is the sum of the right-hand sides
/// of all rows with an artificial variable.
fn is_zero_cost<F: Real>(artificial_cost: F, initial_cost: F) -> bool {
    artificial_cost.abs() <= F::TOLERANCE * initial_cost.max(F::one())
}

/// LP's can be either feasible (allowing at least one solution) or infeasible (allowing no
/// solutions).
///
/// If the problem is feasible, it can either have full rank, or be rank deficient.
#[derive(Debug, PartialEq)]
pub enum RankedFeasibilityResult<F> {
    /// The problem is feasible and the tableau is in a basic feasible solution state without
    /// artificial variables in the basis, apart from those in redundant rows.
    Feasible {
        /// Tableau at the end of the first phase.
        tableau: Tableau<F, Artificial>,
        /// Remaining sum of artificial variables, zero within tolerance.
        artificial_cost: F,
        /// Whether the problem needs rows to be removed.
        rank: Rank,
    },
    /// The problem is not feasible.
    Infeasible {
        /// The minimal sum of artificial variables, which is positive.
        artificial_cost: F,
    },
}

/// A matrix or linear program either has full rank, or be rank deficient.
///
/// In case it is rank deficient, a sorted, deduplicated list of (row)indices should be provided,
/// that when removed, makes the matrix or linear program full rank.
#[derive(Debug, Eq, PartialEq)]
pub enum Rank {
    /// The matrix is full rank, no rows need to be removed.
    Full,
    /// The `Vec<usize>` is sorted and contains no duplicate values.
    Deficient(Vec<usize>),
}

/// Removes all artificial variables from the tableau by making a basis change "at zero level", or
/// without change of cost of the current solution.
///
/// # Arguments
///
/// * `tableau`: Tableau to change the basis for.
///
/// # Return value
///
/// A `Vec` with indices of rows that are redundant. Is sorted as a side effect of the algorithm.
fn remove_artificial_basis_variables<F: Real>(tableau: &mut Tableau<F, Artificial>) -> Vec<usize> {
    let mut rows_to_remove = Vec::new();

    for (row, artificial) in tableau.artificial_basis_rows() {
        match tableau.non_artificial_pivot_column(row) {
            Some(column) => {
                trace!("Artificial {} leaves row {} for column {} at zero level", artificial, row, column);
                tableau.pivot(row, column);
            },
            None => rows_to_remove.push(row),
        }
    }

    debug_assert!(rows_to_remove.is_sorted());
    rows_to_remove
}
