//! # Reaction Solver
//!
//! Static-equilibrium reactions for the two support schemes. Both are
//! statically determinate by construction, so no iteration is involved:
//! pin + roller resolves from the moment balance about the pin, a fixed
//! end takes the whole force and moment balance itself.
//!
//! Reactions are reported positive-upward (forces) and
//! positive-counterclockwise (moments), with downward-positive load
//! input. Applied pure moments enter the moment balance but never the
//! force balance.

use serde::{Deserialize, Serialize};

use crate::errors::BeamResult;
use crate::loads::Load;
use crate::supports::Support;
use crate::units::UnitSystem;

/// Horizontal reactions below this magnitude are noise and are not
/// emitted at all.
pub const HORIZONTAL_EPS: f64 = 1e-10;

/// A single support reaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Reaction {
    /// Vertical force `r` (positive upward) at position `x`
    Vertical { at: String, x: f64, r: f64 },

    /// Reaction moment `m` (positive counterclockwise) at position `x`
    Moment { at: String, x: f64, m: f64 },

    /// Horizontal force `h` (positive toward +x) at the restrained support
    Horizontal { at: String, h: f64 },
}

impl Reaction {
    /// Support name this reaction acts at
    pub fn at(&self) -> &str {
        match self {
            Reaction::Vertical { at, .. }
            | Reaction::Moment { at, .. }
            | Reaction::Horizontal { at, .. } => at,
        }
    }

    /// Convert a base-unit reaction into display units
    pub fn from_base(&self, units: &UnitSystem) -> Reaction {
        match self {
            Reaction::Vertical { at, x, r } => Reaction::Vertical {
                at: at.clone(),
                x: units.length_from_base(*x),
                r: units.force_from_base(*r),
            },
            Reaction::Moment { at, x, m } => Reaction::Moment {
                at: at.clone(),
                x: units.length_from_base(*x),
                m: units.moment_from_base(*m),
            },
            Reaction::Horizontal { at, h } => Reaction::Horizontal {
                at: at.clone(),
                h: units.force_from_base(*h),
            },
        }
    }

    /// All values finite?
    pub fn is_finite(&self) -> bool {
        match self {
            Reaction::Vertical { x, r, .. } => x.is_finite() && r.is_finite(),
            Reaction::Moment { x, m, .. } => x.is_finite() && m.is_finite(),
            Reaction::Horizontal { h, .. } => h.is_finite(),
        }
    }
}

/// Total downward load on the beam
fn total_vertical(loads: &[Load]) -> f64 {
    loads.iter().map(|l| l.vertical_component_total()).sum()
}

/// Net moment of all loads about the point `c`: `P*(x - c)` terms for
/// concentrated verticals, resultant-times-arm for span loads (skipped
/// when the resultant centroid is degenerate), plus applied couples.
fn net_load_moment_about(c: f64, loads: &[Load]) -> f64 {
    let mut total = 0.0;
    for load in loads {
        if let Some(trap) = load.as_trapezoid() {
            if let Some(centroid) = trap.centroid() {
                total += trap.total() * (centroid - c);
            }
        } else if let crate::loads::LoadKind::Moment { m, .. } = load.kind {
            total += m;
        } else {
            total += load.vertical_component_total() * (load_position(load) - c);
        }
    }
    total
}

fn load_position(load: &Load) -> f64 {
    match load.kind {
        crate::loads::LoadKind::Point { x, .. }
        | crate::loads::LoadKind::Angled { x, .. }
        | crate::loads::LoadKind::Moment { x, .. } => x,
        // Span loads are handled through their resultant
        crate::loads::LoadKind::Udl { a, .. } | crate::loads::LoadKind::Uvl { a, .. } => a,
    }
}

/// Solve support reactions for the given scheme. All quantities in base
/// units; the support must already be validated.
pub fn solve_reactions(
    length: f64,
    support: &Support,
    loads: &[Load],
) -> BeamResult<Vec<Reaction>> {
    let mut reactions = Vec::new();
    let total_v = total_vertical(loads);
    let total_h: f64 = loads.iter().map(|l| l.horizontal_component()).sum();

    match support {
        Support::PinRoller { pin_x, roller_x } => {
            let roller_r = net_load_moment_about(*pin_x, loads) / (roller_x - pin_x);
            let pin_r = total_v - roller_r;

            reactions.push(Reaction::Vertical {
                at: "Pin".to_string(),
                x: *pin_x,
                r: pin_r,
            });
            reactions.push(Reaction::Vertical {
                at: "Roller".to_string(),
                x: *roller_x,
                r: roller_r,
            });
            if total_h.abs() > HORIZONTAL_EPS {
                reactions.push(Reaction::Horizontal {
                    at: "Pin".to_string(),
                    h: -total_h,
                });
            }
        }
        Support::Fixed { side } => {
            let fixed_x = side.position(length);
            reactions.push(Reaction::Vertical {
                at: "Fixed".to_string(),
                x: fixed_x,
                r: total_v,
            });
            reactions.push(Reaction::Moment {
                at: "Fixed".to_string(),
                x: fixed_x,
                m: -net_load_moment_about(fixed_x, loads),
            });
            if total_h.abs() > HORIZONTAL_EPS {
                reactions.push(Reaction::Horizontal {
                    at: "Fixed".to_string(),
                    h: -total_h,
                });
            }
        }
    }

    Ok(reactions)
}

/// Iterator over vertical reactions as `(x, r)` pairs
pub fn vertical_reactions(reactions: &[Reaction]) -> impl Iterator<Item = (f64, f64)> + '_ {
    reactions.iter().filter_map(|reaction| match reaction {
        Reaction::Vertical { x, r, .. } => Some((*x, *r)),
        _ => None,
    })
}

/// Iterator over moment reactions as `(x, m)` pairs
pub fn moment_reactions(reactions: &[Reaction]) -> impl Iterator<Item = (f64, f64)> + '_ {
    reactions.iter().filter_map(|reaction| match reaction {
        Reaction::Moment { x, m, .. } => Some((*x, *m)),
        _ => None,
    })
}
