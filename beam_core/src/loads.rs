//! # Load Model
//!
//! Discrete loads applied to the beam: point, angled, uniformly
//! distributed (UDL), linearly varying (UVL), and pure moment loads.
//!
//! ## Sign Convention
//!
//! Fixed once for the whole engine and never re-derived:
//! - Point/distributed magnitudes are positive downward
//! - Applied moments are positive counterclockwise
//! - Angled loads give a magnitude and an angle measured
//!   counterclockwise from the +x axis; the downward vertical component
//!   is `p * sin(theta)` and the +x horizontal component is
//!   `p * cos(theta)`
//!
//! ## Example
//!
//! ```rust
//! use beam_core::loads::Load;
//!
//! let p = Load::point(15.0, 60.0).with_label("P1");
//! let w = Load::udl(0.0, 30.0, 10.0).with_label("W1");
//! assert_eq!(p.label, "P1");
//! assert!((w.vertical_component_total() - 300.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::units::UnitSystem;

/// Intensity sums below this are treated as a zero-resultant span load
/// and skipped, to keep the trapezoid centroid division finite.
pub const INTENSITY_SUM_EPS: f64 = 1e-10;

// ============================================================================
// Load Kinds
// ============================================================================

/// How a load acts on the beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LoadKind {
    /// Point load `p` (positive downward) at position `x`
    Point { x: f64, p: f64 },

    /// Inclined point load: magnitude `p`, angle `theta_deg`
    /// counterclockwise from the +x axis
    Angled { x: f64, p: f64, theta_deg: f64 },

    /// Uniformly distributed load of intensity `w` over `[a, b]`
    Udl { a: f64, b: f64, w: f64 },

    /// Linearly varying load from `w1` at `a` to `w2` at `b`
    Uvl { a: f64, b: f64, w1: f64, w2: f64 },

    /// Applied couple `m` (positive counterclockwise) at position `x`
    Moment { x: f64, m: f64 },
}

impl LoadKind {
    /// Get display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            LoadKind::Point { .. } => "Point",
            LoadKind::Angled { .. } => "Angled",
            LoadKind::Udl { .. } => "UDL",
            LoadKind::Uvl { .. } => "UVL",
            LoadKind::Moment { .. } => "Moment",
        }
    }

    /// True for span (distributed) loads
    pub fn is_distributed(&self) -> bool {
        matches!(self, LoadKind::Udl { .. } | LoadKind::Uvl { .. })
    }
}

// ============================================================================
// Load
// ============================================================================

/// A single load entry
///
/// Carries a row id (for UI list management) and a user label alongside
/// the load geometry itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Load {
    /// Unique identifier for this load row
    pub id: Uuid,

    /// User-provided label
    pub label: String,

    /// Load geometry and magnitude
    pub kind: LoadKind,
}

impl Load {
    fn with_kind(kind: LoadKind) -> Self {
        Load {
            id: Uuid::new_v4(),
            label: String::new(),
            kind,
        }
    }

    /// Create a point load (positive downward) at `x`
    pub fn point(x: f64, p: f64) -> Self {
        Load::with_kind(LoadKind::Point { x, p })
    }

    /// Create an angled load at `x`
    pub fn angled(x: f64, p: f64, theta_deg: f64) -> Self {
        Load::with_kind(LoadKind::Angled { x, p, theta_deg })
    }

    /// Create a uniformly distributed load over `[a, b]`
    pub fn udl(a: f64, b: f64, w: f64) -> Self {
        Load::with_kind(LoadKind::Udl { a, b, w })
    }

    /// Create a linearly varying load over `[a, b]`
    pub fn uvl(a: f64, b: f64, w1: f64, w2: f64) -> Self {
        Load::with_kind(LoadKind::Uvl { a, b, w1, w2 })
    }

    /// Create an applied moment (positive counterclockwise) at `x`
    pub fn moment(x: f64, m: f64) -> Self {
        Load::with_kind(LoadKind::Moment { x, m })
    }

    /// Set the label and return self (builder pattern)
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Normalize span orientation: callers are not required to supply
    /// `a < b`, so reversed spans are swapped (intensities travel with
    /// their endpoints).
    pub fn normalized(mut self) -> Self {
        self.kind = match self.kind {
            LoadKind::Udl { a, b, w } if a > b => LoadKind::Udl { a: b, b: a, w },
            LoadKind::Uvl { a, b, w1, w2 } if a > b => LoadKind::Uvl {
                a: b,
                b: a,
                w1: w2,
                w2: w1,
            },
            other => other,
        };
        self
    }

    /// Convert every quantity to base units (meters, newtons)
    pub fn to_base(&self, units: &UnitSystem) -> Self {
        let lf = units.length_factor();
        let kind = match self.kind {
            LoadKind::Point { x, p } => LoadKind::Point {
                x: x * lf,
                p: units.force_to_base(p),
            },
            LoadKind::Angled { x, p, theta_deg } => LoadKind::Angled {
                x: x * lf,
                p: units.force_to_base(p),
                theta_deg,
            },
            LoadKind::Udl { a, b, w } => LoadKind::Udl {
                a: a * lf,
                b: b * lf,
                w: units.distributed_to_base(w),
            },
            LoadKind::Uvl { a, b, w1, w2 } => LoadKind::Uvl {
                a: a * lf,
                b: b * lf,
                w1: units.distributed_to_base(w1),
                w2: units.distributed_to_base(w2),
            },
            LoadKind::Moment { x, m } => LoadKind::Moment {
                x: x * lf,
                m: units.moment_to_base(m),
            },
        };
        Load {
            id: self.id,
            label: self.label.clone(),
            kind,
        }
    }

    /// Downward vertical component for concentrated loads, total
    /// downward resultant for span loads, zero for pure moments
    pub fn vertical_component_total(&self) -> f64 {
        match self.kind {
            LoadKind::Point { p, .. } => p,
            LoadKind::Angled { p, theta_deg, .. } => p * theta_deg.to_radians().sin(),
            LoadKind::Udl { .. } | LoadKind::Uvl { .. } => {
                self.as_trapezoid().map(|t| t.total()).unwrap_or(0.0)
            }
            LoadKind::Moment { .. } => 0.0,
        }
    }

    /// Horizontal (+x) component; only angled loads produce one
    pub fn horizontal_component(&self) -> f64 {
        match self.kind {
            LoadKind::Angled { p, theta_deg, .. } => p * theta_deg.to_radians().cos(),
            _ => 0.0,
        }
    }

    /// Span-load view of this load, if it is distributed
    pub fn as_trapezoid(&self) -> Option<Trapezoid> {
        match self.kind {
            LoadKind::Udl { a, b, w } => Some(Trapezoid { a, b, w1: w, w2: w }),
            LoadKind::Uvl { a, b, w1, w2 } => Some(Trapezoid { a, b, w1, w2 }),
            _ => None,
        }
    }
}

// ============================================================================
// Trapezoid Resultants
// ============================================================================

/// A linearly varying load block over `[a, b]`, the common shape behind
/// both UDL (`w1 == w2`) and UVL span loads.
///
/// Provides the closed-form resultant, centroid, and partial
/// accumulation used by the reaction solver and both segment builders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trapezoid {
    pub a: f64,
    pub b: f64,
    pub w1: f64,
    pub w2: f64,
}

impl Trapezoid {
    /// Total downward resultant force `(w1 + w2)(b - a) / 2`
    pub fn total(&self) -> f64 {
        (self.w1 + self.w2) * (self.b - self.a) / 2.0
    }

    /// Intensity at position `x` (valid inside the span)
    pub fn intensity_at(&self, x: f64) -> f64 {
        if self.b == self.a {
            return self.w1;
        }
        self.w1 + (self.w2 - self.w1) * (x - self.a) / (self.b - self.a)
    }

    /// Intensity slope d(w)/dx across the span
    pub fn slope(&self) -> f64 {
        if self.b == self.a {
            return 0.0;
        }
        (self.w2 - self.w1) / (self.b - self.a)
    }

    /// Centroid of the full block, or `None` when the intensity sum is
    /// too small for the division to be meaningful
    pub fn centroid(&self) -> Option<f64> {
        let sum = self.w1 + self.w2;
        if sum.abs() < INTENSITY_SUM_EPS {
            return None;
        }
        Some(self.a + (self.b - self.a) * (self.w1 + 2.0 * self.w2) / (3.0 * sum))
    }

    /// The portion of the block left of a cut at `x`, as a smaller
    /// trapezoid; `None` if the cut is at or before the span start
    pub fn left_of(&self, x: f64) -> Option<Trapezoid> {
        if x <= self.a {
            return None;
        }
        if x >= self.b {
            return Some(*self);
        }
        Some(Trapezoid {
            a: self.a,
            b: x,
            w1: self.w1,
            w2: self.intensity_at(x),
        })
    }

    /// Accumulated downward force over `[a, min(x, b)]`
    pub fn accumulated_to(&self, x: f64) -> f64 {
        self.left_of(x).map(|t| t.total()).unwrap_or(0.0)
    }

    /// Moment of the portion left of `x` about the point `x`, taken as
    /// resultant force times its lever arm. Zero when the portion has
    /// no meaningful resultant.
    pub fn moment_of_left_about(&self, x: f64) -> f64 {
        match self.left_of(x) {
            Some(part) => match part.centroid() {
                Some(centroid) => part.total() * (x - centroid),
                None => 0.0,
            },
            None => 0.0,
        }
    }
}
