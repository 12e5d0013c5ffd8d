//! # Pivot rules
//!
//! Strategies for moving from basis to basis in the primal simplex method.
use crate::algorithm::two_phase::tableau::Tableau;
use crate::algorithm::two_phase::tableau::kind::Kind;
use crate::data::number_types::Real;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected for a primal pivot, a row needs to be found. This decision is
/// made independent of the strategy, by the minimum ratio test of the tableau.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// The column of a non basic variable with a relative cost below `-F::TOLERANCE`, or `None`
    /// if there is no such column and the current solution is optimal.
    fn select_primal_pivot_column<F: Real, K: Kind>(&mut self, tableau: &Tableau<F, K>) -> Option<usize>;
}

/// Pivot on the column with the most negative relative cost.
///
/// This is Dantzig's original rule. Ties are broken by taking the lowest column index.
#[derive(Debug, Default)]
pub struct MostNegative;
impl PivotRule for MostNegative {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<F: Real, K: Kind>(&mut self, tableau: &Tableau<F, K>) -> Option<usize> {
        tableau.pivot_columns()
            .filter(|&column| !tableau.is_in_basis(column))
            .map(|column| (column, tableau.relative_cost(column)))
            .filter(|&(_, cost)| cost < -F::TOLERANCE)
            .fold(None, |best, (column, cost)| match best {
                Some((_, best_cost)) if best_cost <= cost => best,
                _ => Some((column, cost)),
            })
            .map(|(column, _)| column)
    }
}

/// Simply pivot on the first column, which has a negative relative cost.
///
/// Together with the first row tie breaking of the ratio test, this is Bland's rule, which can't
/// cycle.
#[derive(Debug, Default)]
pub struct FirstProfitable;
impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<F: Real, K: Kind>(&mut self, tableau: &Tableau<F, K>) -> Option<usize> {
        tableau.pivot_columns()
            .filter(|&column| !tableau.is_in_basis(column))
            .find(|&column| tableau.relative_cost(column) < -F::TOLERANCE)
    }
}
