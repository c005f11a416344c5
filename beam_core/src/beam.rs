//! # Beam Specification
//!
//! The geometric description of the member under analysis: a straight
//! single-span beam with a length and the unit system its inputs and
//! results are expressed in.

use serde::{Deserialize, Serialize};

use crate::errors::{BeamError, BeamResult};
use crate::units::UnitSystem;

/// A straight single-span beam
///
/// # Example
/// ```
/// use beam_core::beam::BeamSpec;
/// use beam_core::units::UnitSystem;
///
/// let beam = BeamSpec::new(30.0, UnitSystem::metric());
/// assert!(beam.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamSpec {
    /// Span length in display length units, must be positive
    pub length: f64,
    /// Display unit system for all inputs and results
    pub units: UnitSystem,
}

impl BeamSpec {
    /// Create a new beam specification
    pub fn new(length: f64, units: UnitSystem) -> Self {
        BeamSpec { length, units }
    }

    /// Check the length invariant
    pub fn validate(&self) -> BeamResult<()> {
        if !self.length.is_finite() || self.length <= 0.0 {
            return Err(BeamError::invalid_beam(
                self.length.to_string(),
                "Beam length must be positive",
            ));
        }
        Ok(())
    }

    /// Span length in base units (meters)
    pub fn length_base(&self) -> f64 {
        self.units.length_to_base(self.length)
    }
}

impl Default for BeamSpec {
    fn default() -> Self {
        BeamSpec::new(1.0, UnitSystem::metric())
    }
}
