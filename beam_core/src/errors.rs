//! # Error Types
//!
//! Structured error types for beam_core. Each variant carries enough
//! context for a caller (or a UI) to report what went wrong and which
//! input to correct.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{BeamError, BeamResult};
//!
//! fn validate_length(length: f64) -> BeamResult<()> {
//!     if length <= 0.0 {
//!         return Err(BeamError::invalid_beam(
//!             length.to_string(),
//!             "Beam length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type BeamResult<T> = Result<T, BeamError>;

/// Structured error type for the analysis pipeline.
///
/// Errors are deterministic functions of the input: there is no retry
/// policy, the caller corrects the input and recomputes.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BeamError {
    /// The beam geometry itself is invalid (non-positive length)
    #[error("Invalid beam: length {length} - {reason}")]
    InvalidBeam { length: String, reason: String },

    /// Support placement is geometrically invalid
    #[error("Invalid support: {reason}")]
    InvalidSupport { reason: String },

    /// A load definition is invalid (bad span, non-finite value, etc.)
    #[error("Invalid load '{label}': {reason}")]
    InvalidLoad { label: String, reason: String },

    /// The pipeline produced an unusable value (non-finite result, etc.)
    #[error("Calculation failed: {stage} - {reason}")]
    Calculation { stage: String, reason: String },
}

impl BeamError {
    /// Create an InvalidBeam error
    pub fn invalid_beam(length: impl Into<String>, reason: impl Into<String>) -> Self {
        BeamError::InvalidBeam {
            length: length.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidSupport error
    pub fn invalid_support(reason: impl Into<String>) -> Self {
        BeamError::InvalidSupport {
            reason: reason.into(),
        }
    }

    /// Create an InvalidLoad error
    pub fn invalid_load(label: impl Into<String>, reason: impl Into<String>) -> Self {
        BeamError::InvalidLoad {
            label: label.into(),
            reason: reason.into(),
        }
    }

    /// Create a Calculation error
    pub fn calculation(stage: impl Into<String>, reason: impl Into<String>) -> Self {
        BeamError::Calculation {
            stage: stage.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BeamError::InvalidBeam { .. } => "INVALID_BEAM",
            BeamError::InvalidSupport { .. } => "INVALID_SUPPORT",
            BeamError::InvalidLoad { .. } => "INVALID_LOAD",
            BeamError::Calculation { .. } => "CALCULATION_FAILED",
        }
    }
}
