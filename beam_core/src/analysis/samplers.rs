//! # Diagram Samplers
//!
//! Turn piecewise segments into explicit `(x, value)` point sequences
//! for chart rendering. Sampling always evaluates the stored
//! polynomials, never re-derives values, so the points are exactly the
//! curves the builders produced. Higher-degree segments get denser
//! sampling for smoother curves.
//!
//! Consecutive points that duplicate both x and value are collapsed;
//! genuine jump pairs (same x, different value) survive, which is what
//! draws the shear staircase at point loads.

use crate::analysis::segment::{DiagramSegment, SegmentKind};

const DUPLICATE_EPS: f64 = 1e-9;

/// Points per shear segment by kind
fn shear_point_count(kind: SegmentKind) -> usize {
    match kind {
        SegmentKind::Const => 2,
        SegmentKind::Linear => 10,
        SegmentKind::Quadratic => 20,
        // Shear never reaches cubic; sample densely if it ever appears
        SegmentKind::Cubic => 30,
    }
}

/// Points per moment segment by kind
fn moment_point_count(kind: SegmentKind) -> usize {
    match kind {
        SegmentKind::Const => 2,
        SegmentKind::Linear => 10,
        SegmentKind::Quadratic => 20,
        SegmentKind::Cubic => 30,
    }
}

fn sample(segments: &[DiagramSegment], count_for: fn(SegmentKind) -> usize) -> Vec<(f64, f64)> {
    let mut points: Vec<(f64, f64)> = Vec::new();

    for seg in segments {
        let n = count_for(seg.kind);
        let width = seg.width();
        for i in 0..n {
            let t = i as f64 / (n - 1) as f64;
            let dx = width * t;
            let point = (seg.a + dx, seg.eval(dx));

            if let Some(last) = points.last() {
                if (last.0 - point.0).abs() < DUPLICATE_EPS
                    && (last.1 - point.1).abs() < DUPLICATE_EPS
                {
                    continue;
                }
            }
            points.push(point);
        }
    }

    points
}

/// Sample shear segments into plot points (2/10/20 per segment)
pub fn sample_shear(segments: &[DiagramSegment]) -> Vec<(f64, f64)> {
    sample(segments, shear_point_count)
}

/// Sample moment segments into plot points (10/20/30 per segment)
pub fn sample_moment(segments: &[DiagramSegment]) -> Vec<(f64, f64)> {
    sample(segments, moment_point_count)
}
