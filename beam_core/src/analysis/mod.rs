//! # Analysis Pipeline
//!
//! The single entry point tying the engine together: validate, convert
//! to base units, solve reactions, segment the span, build the shear
//! and moment polynomials, find extrema, and convert back to the
//! caller's display units.
//!
//! The pipeline is a pure function of its inputs. Every call returns a
//! fresh [`AnalysisResult`] snapshot; failures produce an all-or-nothing
//! invalid result with a diagnostic message and empty collections,
//! never a partially populated one.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::analysis::analyze;
//! use beam_core::beam::BeamSpec;
//! use beam_core::loads::Load;
//! use beam_core::supports::Support;
//! use beam_core::units::UnitSystem;
//!
//! let beam = BeamSpec::new(30.0, UnitSystem::metric());
//! let support = Support::pin_roller(0.0, 30.0);
//! let loads = vec![Load::point(15.0, 60.0).with_label("P1")];
//!
//! let result = analyze(&beam, &support, &loads);
//! assert!(result.is_valid);
//! assert!((result.extrema.m_max - 450.0).abs() < 1e-6);
//! ```

pub mod events;
pub mod extrema;
pub mod moment;
pub mod reactions;
pub mod samplers;
pub mod segment;
pub mod shear;

use serde::{Deserialize, Serialize};

pub use events::generate_events;
pub use extrema::{find_extrema, Extrema};
pub use moment::{build_moment_segments, moment_at};
pub use reactions::{solve_reactions, Reaction};
pub use samplers::{sample_moment, sample_shear};
pub use segment::{DiagramSegment, SegmentKind};
pub use shear::{build_shear_segments, shear_at};

use crate::beam::BeamSpec;
use crate::errors::{BeamError, BeamResult};
use crate::loads::{Load, LoadKind};
use crate::supports::Support;

/// Complete result of one analysis call, in the caller's display units
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// False when validation or computation failed
    pub is_valid: bool,
    /// Diagnostic message when `is_valid` is false
    pub error: Option<String>,
    /// Support reactions
    pub reactions: Vec<Reaction>,
    /// Sorted event (knot) positions
    pub events: Vec<f64>,
    /// Piecewise shear-force diagram
    pub shear: Vec<DiagramSegment>,
    /// Piecewise bending-moment diagram
    pub moment: Vec<DiagramSegment>,
    /// Global shear/moment extrema with positions
    pub extrema: Extrema,
}

impl AnalysisResult {
    /// The all-or-nothing failure shape: empty collections, zeroed
    /// extrema, and a diagnostic message
    pub fn invalid(error: impl Into<String>) -> Self {
        AnalysisResult {
            is_valid: false,
            error: Some(error.into()),
            ..AnalysisResult::default()
        }
    }
}

/// Reject loads with non-finite values before they poison the pipeline
fn validate_loads(loads: &[Load]) -> BeamResult<()> {
    for load in loads {
        let values: Vec<f64> = match load.kind {
            LoadKind::Point { x, p } => vec![x, p],
            LoadKind::Angled { x, p, theta_deg } => vec![x, p, theta_deg],
            LoadKind::Udl { a, b, w } => vec![a, b, w],
            LoadKind::Uvl { a, b, w1, w2 } => vec![a, b, w1, w2],
            LoadKind::Moment { x, m } => vec![x, m],
        };
        if values.iter().any(|v| !v.is_finite()) {
            return Err(BeamError::invalid_load(
                load.label.clone(),
                "load contains a non-finite value",
            ));
        }
    }
    Ok(())
}

/// Scale support positions from display units into base units
fn support_to_base(support: &Support, length_factor: f64) -> Support {
    match support {
        Support::PinRoller { pin_x, roller_x } => Support::PinRoller {
            pin_x: pin_x * length_factor,
            roller_x: roller_x * length_factor,
        },
        Support::Fixed { side } => Support::Fixed { side: *side },
    }
}

fn run_pipeline(beam: &BeamSpec, support: &Support, loads: &[Load]) -> BeamResult<AnalysisResult> {
    beam.validate()?;
    support.validate(beam.length)?;
    validate_loads(loads)?;

    let units = beam.units;
    let lf = units.length_factor();
    let ff = units.force_factor();
    let mf = units.moment_factor();

    // Normalize everything into the base system (meters, newtons)
    let length = beam.length_base();
    let support_b = support_to_base(support, lf);
    let loads_b: Vec<Load> = loads
        .iter()
        .map(|l| l.clone().normalized().to_base(&units))
        .collect();

    let reactions = solve_reactions(length, &support_b, &loads_b)?;
    let events = generate_events(length, &support_b, &loads_b);
    let shear = build_shear_segments(&events, &reactions, &loads_b);
    let moment = build_moment_segments(&shear, &reactions, &loads_b);
    let extrema = find_extrema(&shear, &moment, &reactions, &loads_b);

    let finite = reactions.iter().all(|r| r.is_finite())
        && shear.iter().all(|s| s.is_finite())
        && moment.iter().all(|s| s.is_finite())
        && extrema.is_finite();
    if !finite {
        return Err(BeamError::calculation(
            "pipeline",
            "analysis produced a non-finite value",
        ));
    }

    // Convert back to display units at the boundary
    Ok(AnalysisResult {
        is_valid: true,
        error: None,
        reactions: reactions.iter().map(|r| r.from_base(&units)).collect(),
        events: events.iter().map(|x| x / lf).collect(),
        shear: shear.iter().map(|s| s.from_base(lf, ff)).collect(),
        moment: moment.iter().map(|s| s.from_base(lf, mf)).collect(),
        extrema: extrema.from_base(&units),
    })
}

/// Analyze a beam under the given support scheme and load collection.
///
/// Pure and synchronous: a complete snapshot in, a complete snapshot
/// out, no retained references, no shared state. Errors are folded into
/// the result's validity flag and message.
pub fn analyze(beam: &BeamSpec, support: &Support, loads: &[Load]) -> AnalysisResult {
    match run_pipeline(beam, support, loads) {
        Ok(result) => result,
        Err(error) => AnalysisResult::invalid(error.to_string()),
    }
}
