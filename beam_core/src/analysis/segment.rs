//! # Diagram Segments
//!
//! A piecewise-polynomial representation shared by the shear and moment
//! diagrams. Each segment covers one event interval `[a, b]` and stores
//! its polynomial in the local variable `dx = x - a`:
//!
//! `f(x) = c0 + c1*dx + c2*dx^2 + c3*dx^3`
//!
//! with only as many coefficients as the segment kind implies. Segments
//! partition the beam with no gaps or overlaps; consecutive segments
//! share a boundary x but may carry different values there (shear jumps
//! at point loads, moment jumps at applied couples).

use serde::{Deserialize, Serialize};

/// Polynomial degree of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Const,
    Linear,
    Quadratic,
    Cubic,
}

impl SegmentKind {
    /// Number of polynomial coefficients this kind carries
    pub fn coefficient_count(&self) -> usize {
        match self {
            SegmentKind::Const => 1,
            SegmentKind::Linear => 2,
            SegmentKind::Quadratic => 3,
            SegmentKind::Cubic => 4,
        }
    }

    /// Kind of the antiderivative (shear kind -> moment kind)
    pub fn integrated(&self) -> SegmentKind {
        match self {
            SegmentKind::Const => SegmentKind::Linear,
            SegmentKind::Linear => SegmentKind::Quadratic,
            SegmentKind::Quadratic => SegmentKind::Cubic,
            SegmentKind::Cubic => SegmentKind::Cubic,
        }
    }
}

/// One polynomial piece of a shear or moment diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramSegment {
    /// Interval start (global x)
    pub a: f64,
    /// Interval end (global x)
    pub b: f64,
    /// Polynomial degree
    pub kind: SegmentKind,
    /// Coefficients over `dx = x - a`, lowest order first
    pub coeffs: Vec<f64>,
    /// Value at the interval start
    pub value_a: f64,
    /// Value at the interval end
    pub value_b: f64,
}

impl DiagramSegment {
    /// Build a segment from its coefficients, evaluating the boundary
    /// values from the polynomial itself
    pub fn new(a: f64, b: f64, kind: SegmentKind, coeffs: Vec<f64>) -> Self {
        debug_assert_eq!(coeffs.len(), kind.coefficient_count());
        let value_a = coeffs[0];
        let value_b = eval_poly(&coeffs, b - a);
        DiagramSegment {
            a,
            b,
            kind,
            coeffs,
            value_a,
            value_b,
        }
    }

    /// Evaluate the polynomial at local offset `dx` from the start
    pub fn eval(&self, dx: f64) -> f64 {
        eval_poly(&self.coeffs, dx)
    }

    /// Evaluate at a global x within `[a, b]`
    pub fn eval_at(&self, x: f64) -> f64 {
        self.eval(x - self.a)
    }

    /// True when `x` lies within this segment's interval
    pub fn contains(&self, x: f64) -> bool {
        x >= self.a && x <= self.b
    }

    /// Interval width
    pub fn width(&self) -> f64 {
        self.b - self.a
    }

    /// Rescale a base-unit segment into display units.
    ///
    /// `length_factor` is base-per-display for x, `value_factor` is
    /// base-per-display for the segment's value. Coefficient `i` picks
    /// up `length_factor^i` because the local variable shrinks too.
    pub fn from_base(&self, length_factor: f64, value_factor: f64) -> DiagramSegment {
        let coeffs: Vec<f64> = self
            .coeffs
            .iter()
            .enumerate()
            .map(|(i, c)| c * length_factor.powi(i as i32) / value_factor)
            .collect();
        DiagramSegment {
            a: self.a / length_factor,
            b: self.b / length_factor,
            kind: self.kind,
            coeffs,
            value_a: self.value_a / value_factor,
            value_b: self.value_b / value_factor,
        }
    }

    /// All stored values finite?
    pub fn is_finite(&self) -> bool {
        self.a.is_finite()
            && self.b.is_finite()
            && self.value_a.is_finite()
            && self.value_b.is_finite()
            && self.coeffs.iter().all(|c| c.is_finite())
    }
}

/// Evaluate `c0 + c1*dx + ...` by Horner's rule
pub fn eval_poly(coeffs: &[f64], dx: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, c| acc * dx + c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval_poly() {
        // 2 + 3dx + dx^2 at dx = 2 -> 12
        assert!((eval_poly(&[2.0, 3.0, 1.0], 2.0) - 12.0).abs() < 1e-12);
        assert_eq!(eval_poly(&[5.0], 100.0), 5.0);
    }

    #[test]
    fn test_boundary_values() {
        let seg = DiagramSegment::new(10.0, 14.0, SegmentKind::Linear, vec![30.0, -5.0]);
        assert_eq!(seg.value_a, 30.0);
        assert!((seg.value_b - 10.0).abs() < 1e-12);
        assert!((seg.eval_at(12.0) - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_integrated_kind() {
        assert_eq!(SegmentKind::Const.integrated(), SegmentKind::Linear);
        assert_eq!(SegmentKind::Linear.integrated(), SegmentKind::Quadratic);
        assert_eq!(SegmentKind::Quadratic.integrated(), SegmentKind::Cubic);
    }

    #[test]
    fn test_from_base_rescales_coefficients() {
        // V(dx) = 100 - 10*dx in N over meters; display in kN keeps the
        // shape: value 100 N -> 0.1 kN, slope -10 N/m -> -0.01 kN/m
        let seg = DiagramSegment::new(0.0, 10.0, SegmentKind::Linear, vec![100.0, -10.0]);
        let disp = seg.from_base(1.0, 1000.0);
        assert!((disp.coeffs[0] - 0.1).abs() < 1e-12);
        assert!((disp.coeffs[1] + 0.01).abs() < 1e-12);
        assert!((disp.value_b - seg.value_b / 1000.0).abs() < 1e-12);

        // Length rescale: x in ft, dx grows by 1/0.3048, so c1 shrinks
        let disp = seg.from_base(0.3048, 1.0);
        let mid_base = seg.eval_at(5.0);
        let mid_disp = disp.eval_at(5.0 / 0.3048);
        assert!((mid_base - mid_disp).abs() < 1e-9);
    }

    #[test]
    fn test_serialization_kind_names() {
        let seg = DiagramSegment::new(0.0, 1.0, SegmentKind::Quadratic, vec![1.0, 2.0, 3.0]);
        let json = serde_json::to_string(&seg).unwrap();
        assert!(json.contains("\"quadratic\""));
        let roundtrip: DiagramSegment = serde_json::from_str(&json).unwrap();
        assert_eq!(seg, roundtrip);
    }
}
