//! # Support Configuration
//!
//! The two statically determinate support schemes the engine offers:
//! a pin plus a roller (simple span, overhangs allowed) or a single
//! fixed end (cantilever). Each removes exactly three degrees of
//! freedom, so reactions always follow from equilibrium alone.

use serde::{Deserialize, Serialize};

use crate::errors::{BeamError, BeamResult};

/// Which end of the beam a fixed support clamps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FixedSide {
    /// Fixed at x = 0
    #[default]
    Left,
    /// Fixed at x = length
    Right,
}

impl FixedSide {
    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            FixedSide::Left => "Left",
            FixedSide::Right => "Right",
        }
    }

    /// Position of the fixed end for a beam of the given length
    pub fn position(&self, length: f64) -> f64 {
        match self {
            FixedSide::Left => 0.0,
            FixedSide::Right => length,
        }
    }
}

/// Support scheme for the beam
///
/// # Example
/// ```
/// use beam_core::supports::Support;
///
/// let simple = Support::pin_roller(0.0, 30.0);
/// assert!(simple.validate(30.0).is_ok());
///
/// // Coincident pin and roller cannot restrain rotation
/// let bad = Support::pin_roller(10.0, 10.0);
/// assert!(bad.validate(30.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Support {
    /// Pin and roller at arbitrary positions along the span.
    ///
    /// The pin may sit right of the roller (overhang configuration);
    /// only coincident or out-of-range positions are rejected.
    PinRoller { pin_x: f64, roller_x: f64 },

    /// Single fixed end (cantilever)
    Fixed { side: FixedSide },
}

impl Support {
    /// Create a pin + roller support
    pub fn pin_roller(pin_x: f64, roller_x: f64) -> Self {
        Support::PinRoller { pin_x, roller_x }
    }

    /// Create a fixed-end support
    pub fn fixed(side: FixedSide) -> Self {
        Support::Fixed { side }
    }

    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Support::PinRoller { .. } => "Pin + Roller",
            Support::Fixed { .. } => "Fixed End",
        }
    }

    /// Validate support placement against the beam length
    pub fn validate(&self, length: f64) -> BeamResult<()> {
        match self {
            Support::PinRoller { pin_x, roller_x } => {
                if *pin_x < 0.0 || *pin_x > length {
                    return Err(BeamError::invalid_support(format!(
                        "pin position {} is outside the beam [0, {}]",
                        pin_x, length
                    )));
                }
                if *roller_x < 0.0 || *roller_x > length {
                    return Err(BeamError::invalid_support(format!(
                        "roller position {} is outside the beam [0, {}]",
                        roller_x, length
                    )));
                }
                if pin_x == roller_x {
                    return Err(BeamError::invalid_support(format!(
                        "pin and roller are coincident at x = {}",
                        pin_x
                    )));
                }
                Ok(())
            }
            // Position is implied by the side, nothing to check
            Support::Fixed { .. } => Ok(()),
        }
    }

    /// Convenience boolean form of [`Support::validate`]
    pub fn is_valid(&self, length: f64) -> bool {
        self.validate(length).is_ok()
    }

    /// Support positions along the beam, for event generation
    pub fn positions(&self, length: f64) -> Vec<f64> {
        match self {
            Support::PinRoller { pin_x, roller_x } => vec![*pin_x, *roller_x],
            Support::Fixed { side } => vec![side.position(length)],
        }
    }
}

impl Default for Support {
    fn default() -> Self {
        Support::PinRoller {
            pin_x: 0.0,
            roller_x: 1.0,
        }
    }
}
