//! # Artificial variables in the tableau
//!
//! Representing artificial variables in the tableau explicitly, as extra columns. When artificial
//! variables are in the basis, we minimize their sum: the top objective row of the first phase.
//! Non artificial variables have artificial cost zero, although they might have a non artificial
//! cost, which is kept up to date in the second objective row.
use crate::algorithm::two_phase::tableau::kind::{Kind, NonArtificial};
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_program::LinearProgram;
use crate::data::linear_program::elements::ConstraintType;
use crate::data::number_types::Real;

/// Tableau with artificial variables.
///
/// Every `>=` and `=` row of the normalized problem receives one; the `<=` rows start with their
/// slack in the basis.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Artificial {
    nr_artificial_variables: usize,
}

impl Kind for Artificial {
    fn nr_objective_rows(&self) -> usize {
        2
    }

    fn nr_artificial_variables(&self) -> usize {
        self.nr_artificial_variables
    }
}

/// Functionality needed only, and for all, artificial tableaus.
///
/// Most of these functions get called in the artificial simplex method, or the method that removes
/// artificial variables from the problem at zero level.
impl<F: Real> Tableau<F, Artificial> {
    /// Assemble the tableau for the first phase.
    ///
    /// The artificial objective row starts out as the negated sum of all rows that have an
    /// artificial variable, which makes it canonical with respect to the initial basis of
    /// artificial and slack variables.
    pub fn new(program: &LinearProgram<F>) -> Self {
        let program = program.normalized();
        let nr_artificial_variables = program.nr_constraints()
            - program.constraints(ConstraintType::Less).len();
        let mut tableau = Self::assemble(&program, Artificial { nr_artificial_variables });

        tableau.matrix.set_value(0, 0, F::one());
        let first_artificial = tableau.first_artificial_column();
        for artificial in first_artificial..(first_artificial + nr_artificial_variables) {
            tableau.matrix.set_value(0, artificial, F::one());
        }
        let first_artificial_row = tableau.nr_objective_rows() + tableau.nr_slacks;
        for row in first_artificial_row..tableau.nr_rows() {
            tableau.matrix.mul_add_rows(row, 0, -F::one());
        }

        tableau
    }

    /// Sum of the values of the artificial variables in the current basic solution.
    pub fn artificial_cost(&self) -> F {
        -self.objective_function_value()
    }

    /// Number of artificial variables in this tableau.
    pub fn nr_artificial_variables(&self) -> usize {
        self.kind.nr_artificial_variables()
    }

    /// Whether a column belongs to an artificial variable.
    pub fn is_artificial(&self, column: usize) -> bool {
        let first = self.first_artificial_column();
        (first..(first + self.nr_artificial_variables())).contains(&column)
    }

    /// Artificial variables that are still in the basis.
    ///
    /// # Return value
    ///
    /// Tuples of the row and the column index of each basic artificial variable, sorted by row.
    pub fn artificial_basis_rows(&self) -> Vec<(usize, usize)> {
        let nr_objective_rows = self.nr_objective_rows();
        self.basis.iter()
            .enumerate()
            .filter(|&(_, &column)| self.is_artificial(column))
            .map(|(index, &column)| (nr_objective_rows + index, column))
            .collect()
    }

    /// First non artificial column that has a nonzero value in a row.
    ///
    /// A zero level pivot on this column drives the artificial variable of that row out of the
    /// basis.
    ///
    /// # Return value
    ///
    /// The column index, or `None` if the row is zero outside of its artificial column, in which
    /// case it is redundant.
    pub fn non_artificial_pivot_column(&self, row: usize) -> Option<usize> {
        debug_assert!(self.constraint_rows().contains(&row));

        self.pivot_columns()
            .filter(|&column| !self.is_in_basis(column))
            .find(|&column| !self.matrix.get_value(row, column).is_negligible())
    }
}

impl<F: Real> Tableau<F, NonArtificial> {
    /// Create the tableau of the second phase from the tableau at the end of the first phase.
    ///
    /// The artificial objective row and its marker column are removed, as are the artificial
    /// columns and the rows that turned out to be redundant. Right-hand side values that are zero
    /// within tolerance are set to exactly zero.
    ///
    /// # Arguments
    ///
    /// * `tableau`: Artificial tableau without artificial variables in the basis, except for
    /// those in the redundant rows.
    /// * `redundant_rows`: Sorted, deduplicated indices of rows to remove.
    pub fn from_artificial(tableau: Tableau<F, Artificial>, redundant_rows: &[usize]) -> Self {
        debug_assert!(redundant_rows.iter().all(|&row| tableau.constraint_rows().contains(&row)));
        debug_assert!(tableau.artificial_basis_rows().iter().all(|(row, _)| redundant_rows.contains(row)));

        let first_artificial = tableau.first_artificial_column();
        let Tableau { mut matrix, basis, nr_variables, nr_slacks, nr_surpluses, kind } = tableau;
        let nr_objective_rows = kind.nr_objective_rows();

        let rows_to_remove = std::iter::once(0)
            .chain(redundant_rows.iter().copied())
            .collect::<Vec<_>>();
        let columns_to_remove = std::iter::once(0)
            .chain(first_artificial..(first_artificial + kind.nr_artificial_variables()))
            .collect::<Vec<_>>();
        matrix.remove_rows(&rows_to_remove);
        matrix.remove_columns(&columns_to_remove);

        let rhs_column = matrix.nr_columns() - 1;
        for row in 1..matrix.nr_rows() {
            if matrix.get_value(row, rhs_column).is_negligible() {
                matrix.set_value(row, rhs_column, F::zero());
            }
        }

        // Only the marker column in front of the basic columns is removed
        let basis = basis.into_iter()
            .enumerate()
            .filter(|&(index, _)| !redundant_rows.contains(&(nr_objective_rows + index)))
            .map(|(_, column)| column - 1)
            .collect();

        Self { matrix, basis, nr_variables, nr_slacks, nr_surpluses, kind: NonArtificial }
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::two_phase::tableau::Tableau;
    use crate::algorithm::two_phase::tableau::kind::{Artificial, NonArtificial};
    use crate::data::linear_algebra::matrix::DenseMatrix;
    use crate::data::linear_program::LinearProgram;
    use crate::data::linear_program::elements::{ConstraintType, Objective};
    use crate::tests::{problem_1, problem_2};

    #[test]
    fn assembly() {
        let tableau = Tableau::<_, Artificial>::new(&problem_2::linear_program());
        assert_eq!(tableau.matrix(), &problem_2::artificial_tableau_form());
        assert_eq!(tableau.nr_artificial_variables(), 2);
        assert_eq!(tableau.artificial_cost(), 10f64);
        assert_eq!(tableau.artificial_basis_rows(), vec![(2, 6), (3, 7)]);
        assert_eq!(tableau.pivot_columns(), 2..6);
        assert_eq!(tableau.constraint_rows(), 2..4);
    }

    #[test]
    fn without_artificial_rows() {
        let tableau = Tableau::<_, Artificial>::new(&problem_1::linear_program());
        assert_eq!(tableau.nr_artificial_variables(), 0);
        assert_eq!(tableau.artificial_cost(), 0f64);
        assert!(tableau.artificial_basis_rows().is_empty());
    }

    #[test]
    fn pivot_column_for_artificial_row() {
        let tableau = Tableau::<_, Artificial>::new(&problem_2::linear_program());
        assert_eq!(tableau.non_artificial_pivot_column(2), Some(2));
        assert!(tableau.is_artificial(6));
        assert!(!tableau.is_artificial(5));
    }

    #[test]
    fn into_non_artificial() {
        let mut tableau = Tableau::<_, Artificial>::new(&problem_2::linear_program());
        // Bring both decision variables into the basis: x = 1.6, y = 1.2
        tableau.pivot(3, 2);
        tableau.pivot(2, 3);
        assert!(tableau.artificial_basis_rows().is_empty());
        assert!(tableau.artificial_cost().abs() < 1e-12);

        let tableau = Tableau::<_, NonArtificial>::from_artificial(tableau, &[]);
        assert_eq!(tableau.nr_rows(), 3);
        assert_eq!(tableau.nr_columns(), 6);
        assert_eq!(tableau.basic_row(1), Some(2));
        assert_eq!(tableau.basic_row(2), Some(1));
        let bfs = tableau.current_bfs();
        assert!((bfs[0] - 1.6).abs() < 1e-12);
        assert!((bfs[1] - 1.2).abs() < 1e-12);
        // Minimization, so the objective row holds the negated value
        assert!((tableau.objective_function_value() + 2.8).abs() < 1e-12);
    }

    #[test]
    fn removing_redundant_row() {
        let program = LinearProgram::new(Objective::Maximize, vec![1f64])
            .with_constraint(ConstraintType::Equal, vec![1f64, 1f64])
            .with_constraint(ConstraintType::Equal, vec![1f64, 1f64]);
        let mut tableau = Tableau::<_, Artificial>::new(&program);
        tableau.pivot(2, 2);

        // The second row is now zero outside of its artificial column
        assert_eq!(tableau.matrix().row(3), &[0f64, 0f64, 0f64, -1f64, 1f64, 0f64]);
        assert_eq!(tableau.artificial_basis_rows(), vec![(3, 4)]);
        assert_eq!(tableau.non_artificial_pivot_column(3), None);

        let tableau = Tableau::<_, NonArtificial>::from_artificial(tableau, &[3]);
        assert_eq!(tableau.matrix(), &DenseMatrix::from_data(vec![
            vec![1f64, 0f64, 1f64],
            vec![0f64, 1f64, 1f64],
        ]));
        assert_eq!(tableau.basic_row(1), Some(1));
        assert_eq!(tableau.current_bfs(), vec![1f64]);
    }
}
