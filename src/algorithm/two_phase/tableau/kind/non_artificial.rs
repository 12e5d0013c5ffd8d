//! # Non artificial tableau
//!
//! The tableau of the second phase, or of a problem that doesn't need a first phase.
use crate::algorithm::two_phase::tableau::kind::Kind;

/// The real objective is the only objective row; there are no artificial variables.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct NonArtificial;

impl Kind for NonArtificial {
    fn nr_objective_rows(&self) -> usize {
        1
    }

    fn nr_artificial_variables(&self) -> usize {
        0
    }
}
