//! # Branch and bound
//!
//! Integer programs are solved by a depth first search over linear relaxations. A relaxation with
//! a fractional variable is split in two subproblems, one with that variable bounded from above by
//! the rounded down value and one with it bounded from below by the rounded up value.
use log::debug;

use crate::algorithm::{SolveError, SolveRelaxation};
use crate::data::linear_program::{Constraint, LinearProgram};
use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::data::linear_program::solution::IntegerSolution;
use crate::data::number_types::Real;

/// A problem of which all variables need to take integer values.
pub trait SolveInteger<F> {
    /// Find an optimal integral solution.
    ///
    /// # Return value
    ///
    /// The optimum, `SolveError::Infeasible` if there is no integral point satisfying all
    /// constraints and `SolveError::Unbounded` if the relaxation is unbounded.
    fn solve_integer(&self) -> Result<IntegerSolution<F>, SolveError>;
}

impl<F: Real> SolveInteger<F> for LinearProgram<F> {
    fn solve_integer(&self) -> Result<IntegerSolution<F>, SolveError> {
        let objective = self.objective();
        let mut incumbent: Option<(F, Vec<F>)> = None;
        let mut stack = vec![self.clone()];
        let mut nr_nodes = 0_usize;

        while let Some(subproblem) = stack.pop() {
            nr_nodes += 1;
            let relaxation = match subproblem.solve_relaxation() {
                Ok(relaxation) => relaxation,
                Err(SolveError::Infeasible) => {
                    debug!("Node {}: infeasible", nr_nodes);
                    continue;
                },
                Err(error) => return Err(error),
            };

            if let Some((best, _)) = &incumbent {
                let bound = relaxation.objective_value();
                if !objective.is_improvement(bound, *best, F::INTEGRALITY_TOLERANCE) {
                    debug!("Node {}: bound {} doesn't improve on {}", nr_nodes, bound, best);
                    continue;
                }
            }

            match most_fractional(relaxation.assignments()) {
                None => {
                    debug!("Node {}: new incumbent with value {}", nr_nodes, relaxation.objective_value());
                    incumbent = Some((relaxation.objective_value(), relaxation.into_assignments()));
                },
                Some(variable) => {
                    let value = relaxation.assignments()[variable];
                    debug!("Node {}: branching on variable {} with value {}", nr_nodes, variable, value);

                    let (down, up) = branch(&subproblem, variable, value);
                    // Depth first, rounding down first
                    stack.push(up);
                    stack.push(down);
                },
            }
        }

        debug!("Branch and bound explored {} nodes", nr_nodes);
        let (_, values) = incumbent.ok_or(SolveError::Infeasible)?;
        let objective_value = self.cost().iter()
            .zip(&values)
            .map(|(&cost, &value)| cost * value.round())
            .sum();
        let assignments = values.into_iter()
            .map(|value| value.round().to_i64().ok_or_else(|| {
                SolveError::Unrepresentable(value.to_f64().unwrap_or(f64::NAN))
            }))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(IntegerSolution::new(objective_value, assignments))
    }
}

/// Maximize a linear objective over the integer points satisfying the constraints.
///
/// See `two_phase::maximise` for the arguments.
pub fn maximise<F: Real>(
    cost: &[F],
    less: &[Vec<F>],
    equal: &[Vec<F>],
    greater: &[Vec<F>],
) -> Result<IntegerSolution<F>, SolveError> {
    LinearProgram::from_rows(Objective::Maximize, cost, less, equal, greater).solve_integer()
}

/// Minimize a linear objective over the integer points satisfying the constraints.
///
/// See `two_phase::maximise` for the arguments.
pub fn minimise<F: Real>(
    cost: &[F],
    less: &[Vec<F>],
    equal: &[Vec<F>],
    greater: &[Vec<F>],
) -> Result<IntegerSolution<F>, SolveError> {
    LinearProgram::from_rows(Objective::Minimize, cost, less, equal, greater).solve_integer()
}

/// Variable to branch on: the one with the fractional part closest to a half.
///
/// # Return value
///
/// The lowest index among the most fractional values, or `None` if all values are integral.
fn most_fractional<F: Real>(values: &[F]) -> Option<usize> {
    values.iter()
        .enumerate()
        .filter(|(_, value)| !value.is_integral())
        .fold(None, |best: Option<(usize, F)>, (index, &value)| {
            let fractionality = value.fractionality();
            match best {
                Some((_, best_fractionality)) if best_fractionality >= fractionality => best,
                _ => Some((index, fractionality)),
            }
        })
        .map(|(index, _)| index)
}

/// Split a problem on a fractional variable value.
///
/// # Return value
///
/// The subproblem with `x <= floor(value)` and the one with `x >= ceil(value)`.
fn branch<F: Real>(
    problem: &LinearProgram<F>,
    variable: usize,
    value: F,
) -> (LinearProgram<F>, LinearProgram<F>) {
    let mut coefficients = vec![F::zero(); problem.nr_variables()];
    coefficients[variable] = F::one();

    let mut up = problem.clone();
    up.add_constraint(ConstraintType::Greater, Constraint {
        coefficients: coefficients.clone(),
        right_hand_side: value.ceil(),
    });
    let mut down = problem.clone();
    down.add_constraint(ConstraintType::Less, Constraint {
        coefficients,
        right_hand_side: value.floor(),
    });

    (down, up)
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use crate::algorithm::SolveError;
    use crate::algorithm::branch_and_bound::{maximise, minimise, most_fractional};

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn branching_variable() {
        assert_eq!(most_fractional(&[1f64, 2f64, 3f64]), None);
        assert_eq!(most_fractional(&[1f64, 2.3f64, 3.6f64]), Some(2));
        assert_eq!(most_fractional(&[0.5f64, 2.5f64]), Some(0));
        assert_eq!(most_fractional(&[1f64 + 1e-9, 0.1f64]), Some(1));
    }

    #[test]
    fn rounding_down_the_relaxation() {
        init();

        let solution = maximise(&[1f64, 1f64], &[vec![2f64, 2f64, 3f64]], &[], &[]).unwrap();
        assert_abs_diff_eq!(solution.objective_value(), 1f64);
        assert_eq!(solution.assignments().iter().sum::<i64>(), 1);
    }

    #[test]
    fn textbook_maximum() {
        init();

        let solution = maximise(
            &[5f64, 4f64],
            &[vec![6f64, 4f64, 24f64], vec![1f64, 2f64, 6f64]],
            &[],
            &[],
        ).unwrap();
        assert_abs_diff_eq!(solution.objective_value(), 20f64);
        assert_eq!(solution.assignments(), &[4, 0]);
    }

    #[test]
    fn fractional_vertex() {
        init();

        let solution = maximise(
            &[0f64, 1f64],
            &[vec![-1f64, 1f64, 1f64], vec![3f64, 2f64, 12f64], vec![2f64, 3f64, 12f64]],
            &[],
            &[],
        ).unwrap();
        assert_abs_diff_eq!(solution.objective_value(), 2f64);
        let (x, y) = (solution.assignments()[0], solution.assignments()[1]);
        assert_eq!(y, 2);
        assert!(-x + y <= 1 && 3 * x + 2 * y <= 12 && 2 * x + 3 * y <= 12);
    }

    #[test]
    fn textbook_minimum() {
        init();

        let solution = minimise(
            &[1f64, 1f64],
            &[],
            &[],
            &[vec![1f64, 2f64, 4f64], vec![3f64, 1f64, 6f64]],
        ).unwrap();
        assert_abs_diff_eq!(solution.objective_value(), 3f64);
        assert_eq!(solution.assignments(), &[2, 1]);
    }

    #[test]
    fn no_integral_point() {
        init();

        let result = maximise(&[1f64], &[], &[vec![2f64, 1f64]], &[]);
        assert_eq!(result, Err(SolveError::Infeasible));
    }

    #[test]
    fn unbounded() {
        init();

        assert_eq!(maximise(&[1f64, 0f64], &[vec![0f64, 1f64, 1.5f64]], &[], &[]), Err(SolveError::Unbounded));
    }

    #[test]
    fn too_large_for_integers() {
        init();

        let result = maximise(&[1f64], &[vec![1f64, 1e30f64]], &[], &[]);
        assert_eq!(result, Err(SolveError::Unrepresentable(1e30f64)));
    }
}
