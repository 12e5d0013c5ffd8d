//! # Number types
//!
//! The solvers are written against the `Real` trait, which adds the tolerances the simplex method
//! needs to an ordinary floating point type.
use std::fmt::{Debug, Display};
use std::iter::Sum;

use num_traits::Float;

/// A floating point type the simplex method can work with.
///
/// Floating point arithmetic is not exact, so all comparisons against zero or one that decide the
/// course of the algorithm are made within `TOLERANCE`.
pub trait Real: Float + Debug + Display + Sum {
    /// Values closer together than this are considered equal.
    const TOLERANCE: Self;
    /// Values closer than this to an integer are considered integral.
    const INTEGRALITY_TOLERANCE: Self;

    /// Whether this value is zero within `TOLERANCE`.
    fn is_negligible(self) -> bool {
        self.abs() <= Self::TOLERANCE
    }

    /// Distance to the nearest integer.
    fn fractionality(self) -> Self {
        (self - self.round()).abs()
    }

    /// Whether this value is integral within `INTEGRALITY_TOLERANCE`.
    fn is_integral(self) -> bool {
        self.fractionality() <= Self::INTEGRALITY_TOLERANCE
    }
}

impl Real for f64 {
    const TOLERANCE: Self = 1e-12;
    const INTEGRALITY_TOLERANCE: Self = 1e-6;
}

impl Real for f32 {
    const TOLERANCE: Self = 1e-5;
    const INTEGRALITY_TOLERANCE: Self = 1e-3;
}
