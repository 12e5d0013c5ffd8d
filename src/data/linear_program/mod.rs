//! # Linear programs
//!
//! A linear program in the form the simplex tableau is assembled from: a cost vector, an
//! optimization direction and three lists of constraint rows. All variables are implicitly
//! non-negative.
use std::fmt::{Display, Formatter, Result as FormatResult};

use enum_map::EnumMap;

use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::data::number_types::Real;

pub mod elements;
pub mod solution;

/// A single constraint row, without its (in)equality type.
#[derive(Clone, Debug, PartialEq)]
pub struct Constraint<F> {
    /// One coefficient per variable.
    pub coefficients: Vec<F>,
    /// Right-hand side of the (in)equality.
    pub right_hand_side: F,
}

impl<F: Real> Constraint<F> {
    /// Create a constraint from a row holding the coefficients, followed by the right-hand side.
    ///
    /// # Panics
    ///
    /// If the row is empty.
    pub fn from_row(mut row: Vec<F>) -> Self {
        let right_hand_side = row.pop().expect("A constraint row ends with its right-hand side");
        Self { coefficients: row, right_hand_side }
    }

    /// Multiply both sides of the constraint by minus one.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self {
            coefficients: self.coefficients.iter().map(|&c| -c).collect(),
            right_hand_side: -self.right_hand_side,
        }
    }
}

/// A linear program with non-negative variables.
///
/// Constraints are grouped by type; within a group, the order of insertion is kept. That order
/// determines the row order of the tableau and with that the tie-breaking of the pivot rules.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearProgram<F> {
    objective: Objective,
    cost: Vec<F>,
    constraints: EnumMap<ConstraintType, Vec<Constraint<F>>>,
}

impl<F: Real> LinearProgram<F> {
    /// Create a new linear program without constraints.
    ///
    /// # Arguments
    ///
    /// * `objective`: Whether the cost function should be maximized or minimized.
    /// * `cost`: One cost coefficient per variable.
    pub fn new(objective: Objective, cost: Vec<F>) -> Self {
        Self {
            objective,
            cost,
            constraints: EnumMap::default(),
        }
    }

    /// Create a linear program from constraint rows.
    ///
    /// # Arguments
    ///
    /// * `objective`: Whether the cost function should be maximized or minimized.
    /// * `cost`: One cost coefficient per variable.
    /// * `less`, `equal`, `greater`: Rows of coefficients, each followed by the right-hand side.
    ///
    /// # Panics
    ///
    /// If a row doesn't have exactly one more element than `cost`.
    pub fn from_rows(
        objective: Objective,
        cost: &[F],
        less: &[Vec<F>],
        equal: &[Vec<F>],
        greater: &[Vec<F>],
    ) -> Self {
        let mut program = Self::new(objective, cost.to_vec());
        let groups = [
            (ConstraintType::Less, less),
            (ConstraintType::Equal, equal),
            (ConstraintType::Greater, greater),
        ];
        for (constraint_type, rows) in groups {
            for row in rows {
                program.add_constraint(constraint_type, Constraint::from_row(row.clone()));
            }
        }

        program
    }

    /// Add a constraint given as a row of coefficients followed by the right-hand side.
    ///
    /// # Panics
    ///
    /// If the number of coefficients doesn't match the number of variables.
    #[must_use]
    pub fn with_constraint(mut self, constraint_type: ConstraintType, row: Vec<F>) -> Self {
        self.add_constraint(constraint_type, Constraint::from_row(row));
        self
    }

    /// Add a constraint.
    ///
    /// # Panics
    ///
    /// If the number of coefficients doesn't match the number of variables.
    pub fn add_constraint(&mut self, constraint_type: ConstraintType, constraint: Constraint<F>) {
        assert_eq!(
            constraint.coefficients.len(), self.nr_variables(),
            "A {} constraint has {} coefficients, but the program has {} variables",
            constraint_type, constraint.coefficients.len(), self.nr_variables(),
        );

        self.constraints[constraint_type].push(constraint);
    }

    /// Whether the cost function should be maximized or minimized.
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Cost coefficients, one per variable.
    pub fn cost(&self) -> &[F] {
        &self.cost
    }

    /// The constraints of a single type.
    pub fn constraints(&self, constraint_type: ConstraintType) -> &[Constraint<F>] {
        &self.constraints[constraint_type]
    }

    /// Number of variables in the problem.
    pub fn nr_variables(&self) -> usize {
        self.cost.len()
    }

    /// Number of constraints of all types together.
    pub fn nr_constraints(&self) -> usize {
        self.constraints.values().map(Vec::len).sum()
    }

    /// An equivalent program in which every right-hand side is non-negative.
    ///
    /// A `<=` row with a negative right-hand side is negated and becomes a `>=` row, and vice
    /// versa. A `=` row with a negative right-hand side is negated and stays a `=` row.
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut normalized = Self::new(self.objective, self.cost.clone());
        for (constraint_type, constraints) in &self.constraints {
            for constraint in constraints {
                if constraint.right_hand_side < -F::TOLERANCE {
                    normalized.constraints[constraint_type.flipped()].push(constraint.negated());
                } else {
                    normalized.constraints[constraint_type].push(constraint.clone());
                }
            }
        }

        normalized
    }

    /// Whether the tableau of this program needs artificial variables to start from a basic
    /// feasible solution.
    ///
    /// That is the case when, after normalization, there is at least one `>=` or `=` row: the
    /// slack-only origin is then not a basic feasible solution.
    pub fn needs_artificial_variables(&self) -> bool {
        let normalized = self.normalized();
        !normalized.constraints[ConstraintType::Greater].is_empty()
            || !normalized.constraints[ConstraintType::Equal].is_empty()
    }
}

impl<F: Real> Display for LinearProgram<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        let direction = match self.objective {
            Objective::Maximize => "max",
            Objective::Minimize => "min",
        };
        writeln!(f, "{} {:?}", direction, self.cost)?;
        for (constraint_type, constraints) in &self.constraints {
            for constraint in constraints {
                writeln!(f, "{:?} {} {}", constraint.coefficients, constraint_type, constraint.right_hand_side)?;
            }
        }
        Ok(())
    }
}
