//! # Building blocks to describe linear programs.
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::ops::Neg;

use enum_map::Enum;
use num_traits::One;

/// A `Constraint` is a type of (in)equality.
#[allow(missing_docs)]
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ConstraintType {
    Less,
    Equal,
    Greater,
}

impl ConstraintType {
    /// The constraint type after multiplying both sides of the constraint by minus one.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            ConstraintType::Less => ConstraintType::Greater,
            ConstraintType::Equal => ConstraintType::Equal,
            ConstraintType::Greater => ConstraintType::Less,
        }
    }
}

impl Display for ConstraintType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        f.write_str(match self {
            ConstraintType::Less => "<=",
            ConstraintType::Equal => "=",
            ConstraintType::Greater => ">=",
        })
    }
}

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Objective {
    Maximize,
    #[default]
    Minimize,
}

impl Objective {
    /// Factor that turns this objective into a maximization.
    ///
    /// The algorithms only maximize; a minimization is solved by maximizing the negated cost.
    pub fn sign<F: One + Neg<Output = F>>(self) -> F {
        match self {
            Objective::Maximize => F::one(),
            Objective::Minimize => -F::one(),
        }
    }

    /// Whether `candidate` is a strictly better objective value than `incumbent`, by more than
    /// `margin`.
    pub fn is_improvement<F: num_traits::Float>(self, candidate: F, incumbent: F, margin: F) -> bool {
        match self {
            Objective::Maximize => candidate > incumbent + margin,
            Objective::Minimize => candidate < incumbent - margin,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::elements::{ConstraintType, Objective};

    #[test]
    fn flip_constraint_type() {
        assert_eq!(ConstraintType::Less.flipped(), ConstraintType::Greater);
        assert_eq!(ConstraintType::Greater.flipped(), ConstraintType::Less);
        assert_eq!(ConstraintType::Equal.flipped(), ConstraintType::Equal);
    }

    #[test]
    fn objective() {
        assert_eq!(Objective::Maximize.sign::<f64>(), 1f64);
        assert_eq!(Objective::Minimize.sign::<f64>(), -1f64);

        assert!(Objective::Maximize.is_improvement(2f64, 1f64, 0.5f64));
        assert!(!Objective::Maximize.is_improvement(1.2f64, 1f64, 0.5f64));
        assert!(Objective::Minimize.is_improvement(0f64, 1f64, 0.5f64));
        assert!(!Objective::Minimize.is_improvement(2f64, 1f64, 0.5f64));
    }
}
