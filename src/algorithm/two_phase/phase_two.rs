//! # Phase two: optimizing the real objective
use log::debug;

use crate::algorithm::SolveError;
use crate::algorithm::two_phase::primal as pivot_to_optimality;
use crate::algorithm::two_phase::strategy::pivot_rule::PivotRule;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::algorithm::two_phase::tableau::kind::NonArtificial;
use crate::data::number_types::Real;

/// Reduces the cost of the basic feasible solution to the minimum.
///
/// While calling this method, a number of requirements should be satisfied:
/// - There should be a valid basis (not necessarily optimal <=> dual feasible <=> c >= 0)
/// - All constraint values need to be positive (primary feasibility)
///
/// # Return value
///
/// The values of the decision variables at the optimum, or `SolveError::Unbounded`. The problem
/// can't be infeasible, as a feasible solution is needed to start using this method.
pub(crate) fn primal<F, PR>(tableau: &mut Tableau<F, NonArtificial>) -> Result<Vec<F>, SolveError>
where
    F: Real,
    PR: PivotRule,
{
    let nr_pivots = pivot_to_optimality::<_, _, PR>(tableau)?;
    debug!("Phase two took {} pivots", nr_pivots);

    Ok(tableau.current_bfs())
}
