//! A minimization problem with only `>=` constraints, which needs a first phase.
//!
//! minimize x + y subject to x + 2y >= 4, 3x + y >= 6. The optimum is 2.8 at (1.6, 1.2).
use approx::assert_abs_diff_eq;

use crate::algorithm::SolveRelaxation;
use crate::algorithm::two_phase::phase_one::{self, Rank, RankedFeasibilityResult};
use crate::algorithm::two_phase::phase_two;
use crate::algorithm::two_phase::strategy::pivot_rule::MostNegative;
use crate::algorithm::two_phase::tableau::Tableau;
use crate::algorithm::two_phase::tableau::kind::{Artificial, NonArtificial};
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::LinearProgram;
use crate::data::linear_program::elements::{ConstraintType, Objective};

#[test]
fn conversion_pipeline() {
    let program = linear_program();
    assert!(program.needs_artificial_variables());

    // Artificial tableau form
    let artificial_tableau = Tableau::<_, Artificial>::new(&program);
    assert_eq!(artificial_tableau.matrix(), &artificial_tableau_form());

    // Get to a basic feasible solution
    let feasibility_result = phase_one::primal::<_, MostNegative>(artificial_tableau);
    let artificial_tableau = match feasibility_result {
        Ok(RankedFeasibilityResult::Feasible { tableau, artificial_cost, rank: Rank::Full }) => {
            assert_abs_diff_eq!(artificial_cost, 0f64, epsilon = 1e-12);
            tableau
        },
        other => panic!("Expected a full rank feasible result, got {:?}", other),
    };

    // Non-artificial tableau form
    let mut tableau = Tableau::<_, NonArtificial>::from_artificial(artificial_tableau, &[]);
    assert_eq!(tableau.nr_rows(), 3);
    assert_eq!(tableau.nr_columns(), 6);

    // Already optimal
    let assignments = phase_two::primal::<_, MostNegative>(&mut tableau).unwrap();
    assert_abs_diff_eq!(assignments[0], 1.6f64, epsilon = 1e-12);
    assert_abs_diff_eq!(assignments[1], 1.2f64, epsilon = 1e-12);
    assert_abs_diff_eq!(tableau.objective_function_value(), -2.8f64, epsilon = 1e-12);
}

#[test]
fn solve_relaxation() {
    let solution = linear_program().solve_relaxation().unwrap();
    assert_abs_diff_eq!(solution.objective_value(), 2.8f64, epsilon = 1e-12);
    assert_abs_diff_eq!(solution.assignments()[0], 1.6f64, epsilon = 1e-12);
    assert_abs_diff_eq!(solution.assignments()[1], 1.2f64, epsilon = 1e-12);
}

pub fn linear_program() -> LinearProgram<f64> {
    LinearProgram::new(Objective::Minimize, vec![1f64, 1f64])
        .with_constraint(ConstraintType::Greater, vec![1f64, 2f64, 4f64])
        .with_constraint(ConstraintType::Greater, vec![3f64, 1f64, 6f64])
}

/// Columns: two markers, x, y, two surpluses, two artificials and the right-hand side.
pub fn artificial_tableau_form() -> DenseMatrix<f64> {
    DenseMatrix::from_data(vec![
        vec![1f64, 0f64, -4f64, -3f64, 1f64, 1f64, 0f64, 0f64, -10f64],
        vec![0f64, 1f64, 1f64, 1f64, 0f64, 0f64, 0f64, 0f64, 0f64],
        vec![0f64, 0f64, 1f64, 2f64, -1f64, 0f64, 1f64, 0f64, 4f64],
        vec![0f64, 0f64, 3f64, 1f64, 0f64, -1f64, 0f64, 1f64, 6f64],
    ])
}
