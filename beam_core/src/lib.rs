//! # beam_core - Single-Span Beam Analysis Engine
//!
//! `beam_core` computes support reactions and piecewise shear-force and
//! bending-moment diagrams for a straight single-span beam under point,
//! angled, distributed (uniform and linearly varying), and applied
//! moment loads.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: one pure function call per analysis, a complete
//!   snapshot in and a complete snapshot out
//! - **Closed-form**: reactions from equilibrium, diagrams as exact
//!   piecewise polynomials (moment is structurally the integral of
//!   shear on every interval), extrema from exact critical points
//! - **JSON-First**: every public type implements Serialize/Deserialize
//! - **Rich Errors**: structured error types folded into the result's
//!   validity flag at the boundary
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::analysis::analyze;
//! use beam_core::beam::BeamSpec;
//! use beam_core::loads::Load;
//! use beam_core::supports::Support;
//! use beam_core::units::UnitSystem;
//!
//! // 30 m simple span with a 60 kN point load at midspan
//! let beam = BeamSpec::new(30.0, UnitSystem::metric());
//! let support = Support::pin_roller(0.0, 30.0);
//! let loads = vec![Load::point(15.0, 60.0).with_label("P1")];
//!
//! let result = analyze(&beam, &support, &loads);
//! assert!(result.is_valid);
//! println!("Mmax = {:.1} kN*m at x = {:.1} m",
//!     result.extrema.m_max, result.extrema.m_max_x);
//! ```
//!
//! ## Modules
//!
//! - [`analysis`] - The pipeline: reactions, events, segments, extrema
//! - [`beam`] - Beam geometry specification
//! - [`supports`] - Support schemes and validation
//! - [`loads`] - Load model and resultant math
//! - [`units`] - Unit normalization between display and base systems
//! - [`errors`] - Structured error types

pub mod analysis;
pub mod beam;
pub mod errors;
pub mod loads;
pub mod supports;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use analysis::{analyze, AnalysisResult, Extrema, Reaction};
pub use beam::BeamSpec;
pub use errors::{BeamError, BeamResult};
pub use loads::Load;
pub use supports::Support;
pub use units::UnitSystem;
