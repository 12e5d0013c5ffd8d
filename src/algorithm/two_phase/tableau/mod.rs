//! # Data structures for Simplex
//!
//! Contains the simplex tableau and logic for elementary operations which can be performed upon it.
//!
//! Columns are laid out as
//!
//! `[objective markers | decision variables | slacks | surpluses | artificials | right-hand side]`
//!
//! and rows as
//!
//! `[objective rows | <= rows | >= rows | = rows]`.
//!
//! Objective rows hold the negated cost coefficients: the simplex method maximizes by driving all
//! negative entries of the (top) objective row to zero.
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::ops::Range;

use crate::algorithm::two_phase::tableau::kind::{Kind, NonArtificial};
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::elements::ConstraintType;
use crate::data::linear_program::LinearProgram;
use crate::data::number_types::Real;

pub mod kind;

/// The most high-level data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// It owns a dense copy of the problem, which is mutated in place by pivots. A tableau lives for
/// the duration of a single phase.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau<F, K> {
    /// Rows and columns as described in the module documentation.
    matrix: DenseMatrix<F>,
    /// For each constraint row, the column of the variable that is basic in it.
    basis: Vec<usize>,
    /// Number of decision variables of the original problem.
    nr_variables: usize,
    /// One slack variable per `<=` row.
    nr_slacks: usize,
    /// One surplus variable per `>=` row.
    nr_surpluses: usize,
    /// Whether this tableau has artificial variables (and is in the first phase of the two-phase
    /// algorithm) or not. See the `Kind` trait for more information.
    kind: K,
}

impl<F: Real> Tableau<F, NonArtificial> {
    /// Assemble the tableau of a linear program that has the origin as a basic feasible solution.
    ///
    /// The program is normalized first, such that all right-hand sides are non-negative. The
    /// slack variables form the initial basis.
    ///
    /// # Panics
    ///
    /// If the normalized program has `>=` or `=` rows; use `Tableau::<_, Artificial>::new`.
    pub fn new(program: &LinearProgram<F>) -> Self {
        Self::assemble(&program.normalized(), NonArtificial)
    }
}

impl<F: Real, K: Kind> Tableau<F, K> {
    /// Lay out a normalized program in a tableau of the given kind.
    ///
    /// The top `kind.nr_objective_rows()` rows are left for the caller to fill, except for the
    /// bottom one of them, which receives the real objective. Every `>=` and `=` row gets an
    /// artificial variable, so the kind needs exactly that many of them.
    fn assemble(program: &LinearProgram<F>, kind: K) -> Self {
        let less = program.constraints(ConstraintType::Less);
        let greater = program.constraints(ConstraintType::Greater);
        let equal = program.constraints(ConstraintType::Equal);
        assert_eq!(
            kind.nr_artificial_variables(), greater.len() + equal.len(),
            "Every >= and = row needs an artificial variable",
        );

        let nr_markers = kind.nr_objective_rows();
        let nr_variables = program.nr_variables();
        let (nr_slacks, nr_surpluses) = (less.len(), greater.len());
        let first_artificial = nr_markers + nr_variables + nr_slacks + nr_surpluses;
        let nr_rows = nr_markers + program.nr_constraints();
        let nr_columns = first_artificial + kind.nr_artificial_variables() + 1;

        let mut matrix = DenseMatrix::zeros(nr_rows, nr_columns);
        let objective_row = nr_markers - 1;
        matrix.set_value(objective_row, objective_row, F::one());
        let sign = program.objective().sign::<F>();
        for (j, &cost) in program.cost().iter().enumerate() {
            matrix.set_value(objective_row, nr_markers + j, -(sign * cost));
        }

        let rows = less.iter().map(|c| (c, F::one()))
            .chain(greater.iter().map(|c| (c, -F::one())))
            .chain(equal.iter().map(|c| (c, F::zero())));
        let mut basis = Vec::with_capacity(program.nr_constraints());
        for (i, (constraint, padding)) in rows.enumerate() {
            let row = nr_markers + i;
            for (j, &coefficient) in constraint.coefficients.iter().enumerate() {
                matrix.set_value(row, nr_markers + j, coefficient);
            }
            matrix.set_value(row, nr_columns - 1, constraint.right_hand_side);

            // Slack or surplus, in the column matching the row
            if i < nr_slacks + nr_surpluses {
                matrix.set_value(row, nr_markers + nr_variables + i, padding);
            }
            if i < nr_slacks {
                basis.push(nr_markers + nr_variables + i);
            } else {
                let artificial = first_artificial + i - nr_slacks;
                matrix.set_value(row, artificial, F::one());
                basis.push(artificial);
            }
        }

        Self { matrix, basis, nr_variables, nr_slacks, nr_surpluses, kind }
    }

    /// Select the row to pivot on using the minimum ratio test.
    ///
    /// Only constraint rows with a strictly positive entry in the pivot column and a non-negative
    /// right-hand side are considered. Ties are broken by taking the first row.
    ///
    /// # Arguments
    ///
    /// * `column`: Index of the entering variable's column.
    ///
    /// # Return value
    ///
    /// The row index, or `None` if no row limits the entering variable: the problem is unbounded.
    pub fn select_primal_pivot_row(&self, column: usize) -> Option<usize> {
        debug_assert!(self.pivot_columns().contains(&column));

        let rhs_column = self.rhs_column();
        self.constraint_rows()
            .filter_map(|i| {
                let entry = self.matrix.get_value(i, column);
                let rhs = self.matrix.get_value(i, rhs_column);
                (entry > F::TOLERANCE && rhs >= F::zero()).then(|| (i, rhs / entry))
            })
            .fold(None, |best, (i, ratio)| match best {
                Some((_, best_ratio)) if best_ratio <= ratio => best,
                _ => Some((i, ratio)),
            })
            .map(|(i, _)| i)
    }

    /// Perform a Gauss-Jordan pivot.
    ///
    /// The pivot row is divided by the pivot value, after which the pivot column is eliminated
    /// from all other rows, including the objective rows.
    pub fn pivot(&mut self, row: usize, column: usize) {
        debug_assert!(self.constraint_rows().contains(&row));
        debug_assert!(self.pivot_columns().contains(&column));

        let pivot_value = self.matrix.get_value(row, column);
        debug_assert!(!pivot_value.is_negligible());
        self.matrix.divide_row(row, pivot_value);

        for other in (0..self.nr_rows()).filter(|&other| other != row) {
            let factor = self.matrix.get_value(other, column);
            if !factor.is_zero() {
                self.matrix.mul_add_rows(row, other, -factor);
            }
        }

        let index = row - self.nr_objective_rows();
        self.basis[index] = column;
    }

    /// Relative cost of a column: its entry in the top objective row.
    ///
    /// A negative relative cost means that increasing the variable improves the objective.
    pub fn relative_cost(&self, column: usize) -> F {
        self.matrix.get_value(0, column)
    }

    /// Get the value of the current solution for the top objective row.
    pub fn objective_function_value(&self) -> F {
        self.matrix.get_value(0, self.rhs_column())
    }

    /// The row in which a column is basic, if it is in the basis.
    ///
    /// The basis is tracked explicitly, so that a column that merely looks like a unit vector
    /// (for example, a copy of a basic column) is not mistaken for a basic one.
    pub fn basic_row(&self, column: usize) -> Option<usize> {
        self.basis.iter()
            .position(|&basic| basic == column)
            .map(|index| self.nr_objective_rows() + index)
    }

    /// Whether a column is in the basis.
    pub fn is_in_basis(&self, column: usize) -> bool {
        self.basis.contains(&column)
    }

    /// Get the current basic feasible solution.
    ///
    /// # Return value
    ///
    /// The value of each decision variable: the right-hand side of the row it is basic in, or zero
    /// if it is not basic.
    pub fn current_bfs(&self) -> Vec<F> {
        let rhs_column = self.rhs_column();
        (0..self.nr_variables)
            .map(|j| self.first_variable_column() + j)
            .map(|column| self.basic_row(column)
                .map_or(F::zero(), |row| self.matrix.get_value(row, rhs_column)))
            .collect()
    }

    /// Columns that may enter the basis: the decision, slack and surplus variables.
    ///
    /// Artificial variables that left the basis never return to it.
    pub fn pivot_columns(&self) -> Range<usize> {
        self.first_variable_column()..self.first_artificial_column()
    }

    /// Rows that may be pivoted on: everything except the objective rows.
    pub fn constraint_rows(&self) -> Range<usize> {
        self.nr_objective_rows()..self.nr_rows()
    }

    /// Number of objective rows.
    pub fn nr_objective_rows(&self) -> usize {
        self.kind.nr_objective_rows()
    }

    /// Number of decision variables in the original problem.
    pub(crate) fn nr_variables(&self) -> usize {
        self.nr_variables
    }

    /// Number of rows in the tableau, including the objective rows.
    pub fn nr_rows(&self) -> usize {
        self.matrix.nr_rows()
    }

    /// Number of columns in the tableau, including the markers and right-hand side.
    pub(crate) fn nr_columns(&self) -> usize {
        self.matrix.nr_columns()
    }

    /// Index of the column of the first decision variable.
    fn first_variable_column(&self) -> usize {
        self.kind.nr_objective_rows()
    }

    /// Index of the column of the first artificial variable.
    ///
    /// Also the end of the non-artificial columns when there are no artificial variables.
    fn first_artificial_column(&self) -> usize {
        self.first_variable_column() + self.nr_variables + self.nr_slacks + self.nr_surpluses
    }

    fn rhs_column(&self) -> usize {
        self.nr_columns() - 1
    }

    #[cfg(test)]
    pub(crate) fn matrix(&self) -> &DenseMatrix<F> {
        &self.matrix
    }
}

impl<F: Real, K> Display for Tableau<F, K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        Display::fmt(&self.matrix, f)
    }
}
