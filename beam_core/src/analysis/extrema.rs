//! # Extrema Finder
//!
//! Global maxima and minima of the shear and moment diagrams with their
//! positions. Segment boundary values cover every discontinuity; the
//! interior is handled analytically: a moment extremum can only occur
//! where the shear crosses zero, so linear shear segments get their
//! interpolated crossing and quadratic shear segments get an exact
//! quadratic-formula solve (at most two in-range roots). The vertex of
//! a quadratic shear parabola is checked as an interior shear
//! candidate as well.

use serde::{Deserialize, Serialize};

use crate::analysis::moment::moment_at;
use crate::analysis::reactions::Reaction;
use crate::analysis::segment::{DiagramSegment, SegmentKind};
use crate::loads::Load;
use crate::units::UnitSystem;

/// Global shear and moment extrema with positions
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Extrema {
    pub v_max: f64,
    pub v_max_x: f64,
    pub v_min: f64,
    pub v_min_x: f64,
    pub m_max: f64,
    pub m_max_x: f64,
    pub m_min: f64,
    pub m_min_x: f64,
}

impl Extrema {
    /// Convert base-unit extrema into display units
    pub fn from_base(&self, units: &UnitSystem) -> Extrema {
        Extrema {
            v_max: units.force_from_base(self.v_max),
            v_max_x: units.length_from_base(self.v_max_x),
            v_min: units.force_from_base(self.v_min),
            v_min_x: units.length_from_base(self.v_min_x),
            m_max: units.moment_from_base(self.m_max),
            m_max_x: units.length_from_base(self.m_max_x),
            m_min: units.moment_from_base(self.m_min),
            m_min_x: units.length_from_base(self.m_min_x),
        }
    }

    /// All values finite?
    pub fn is_finite(&self) -> bool {
        [
            self.v_max, self.v_max_x, self.v_min, self.v_min_x, self.m_max, self.m_max_x,
            self.m_min, self.m_min_x,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// Running max/min tracker over (value, position) candidates
struct Tracker {
    max: f64,
    max_x: f64,
    min: f64,
    min_x: f64,
}

impl Tracker {
    fn new() -> Self {
        Tracker {
            max: f64::NEG_INFINITY,
            max_x: 0.0,
            min: f64::INFINITY,
            min_x: 0.0,
        }
    }

    fn consider(&mut self, value: f64, x: f64) {
        if value > self.max {
            self.max = value;
            self.max_x = x;
        }
        if value < self.min {
            self.min = value;
            self.min_x = x;
        }
    }
}

/// Real roots of `c0 + c1*dx + c2*dx^2 = 0` inside `[0, width]`
fn quadratic_roots_in(coeffs: &[f64], width: f64) -> Vec<f64> {
    let (c0, c1, c2) = (coeffs[0], coeffs[1], coeffs[2]);
    let mut roots = Vec::new();
    if c2.abs() < 1e-14 {
        if c1.abs() > 1e-14 {
            roots.push(-c0 / c1);
        }
    } else {
        let disc = c1 * c1 - 4.0 * c2 * c0;
        if disc >= 0.0 {
            let sq = disc.sqrt();
            roots.push((-c1 + sq) / (2.0 * c2));
            roots.push((-c1 - sq) / (2.0 * c2));
        }
    }
    roots.retain(|dx| *dx > 0.0 && *dx < width);
    roots
}

/// Scan the diagrams for global extrema.
///
/// `reactions` and `loads` are needed for the independent moment
/// evaluation at interior zero-shear positions.
pub fn find_extrema(
    shear: &[DiagramSegment],
    moment: &[DiagramSegment],
    reactions: &[Reaction],
    loads: &[Load],
) -> Extrema {
    if shear.is_empty() || moment.is_empty() {
        return Extrema::default();
    }

    let mut v = Tracker::new();
    let mut m = Tracker::new();

    for seg in shear {
        v.consider(seg.value_a, seg.a);
        v.consider(seg.value_b, seg.b);
        // Interior vertex of a shear parabola
        if seg.kind == SegmentKind::Quadratic {
            let vertex = -seg.coeffs[1] / (2.0 * seg.coeffs[2]);
            if vertex > 0.0 && vertex < seg.width() {
                v.consider(seg.eval(vertex), seg.a + vertex);
            }
        }
    }

    for seg in moment {
        m.consider(seg.value_a, seg.a);
        m.consider(seg.value_b, seg.b);
    }

    // Interior moment extrema live at zero-shear crossings
    for seg in shear {
        match seg.kind {
            SegmentKind::Linear => {
                if seg.value_a * seg.value_b < 0.0 {
                    let x = seg.a - seg.value_a / seg.coeffs[1];
                    m.consider(moment_at(x, reactions, loads), x);
                }
            }
            SegmentKind::Quadratic => {
                for dx in quadratic_roots_in(&seg.coeffs, seg.width()) {
                    let x = seg.a + dx;
                    m.consider(moment_at(x, reactions, loads), x);
                }
            }
            _ => {}
        }
    }

    Extrema {
        v_max: v.max,
        v_max_x: v.max_x,
        v_min: v.min,
        v_min_x: v.min_x,
        m_max: m.max,
        m_max_x: m.max_x,
        m_min: m.min,
        m_min_x: m.min_x,
    }
}
