//! # Representation of optimal solutions
//!
//! Once a linear program is solved, the optimal objective value and an assignment of the decision
//! variables are reported back in the terms of the original problem.

/// Optimal solution of a linear program.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<F> {
    /// Value of the objective function in the direction of the original problem.
    objective_value: F,
    /// One value per decision variable, in the order of the cost vector.
    assignments: Vec<F>,
}

impl<F: Copy> Solution<F> {
    /// Create a new `Solution` instance.
    pub fn new(objective_value: F, assignments: Vec<F>) -> Self {
        Self { objective_value, assignments }
    }

    /// The optimal objective value.
    pub fn objective_value(&self) -> F {
        self.objective_value
    }

    /// Values of the decision variables.
    pub fn assignments(&self) -> &[F] {
        &self.assignments
    }

    /// Take the values of the decision variables.
    pub fn into_assignments(self) -> Vec<F> {
        self.assignments
    }
}

/// Optimal solution of a linear program in which all variables need to be integral.
#[derive(Clone, Debug, PartialEq)]
pub struct IntegerSolution<F> {
    objective_value: F,
    assignments: Vec<i64>,
}

impl<F: Copy> IntegerSolution<F> {
    /// Create a new `IntegerSolution` instance.
    pub fn new(objective_value: F, assignments: Vec<i64>) -> Self {
        Self { objective_value, assignments }
    }

    /// The optimal objective value, evaluated at the integral assignment.
    pub fn objective_value(&self) -> F {
        self.objective_value
    }

    /// Values of the decision variables.
    pub fn assignments(&self) -> &[i64] {
        &self.assignments
    }
}
