//! # Moment Segment Builder
//!
//! Builds the bending-moment polynomial for each event interval as the
//! exact antiderivative of that interval's shear segment. The start
//! value is accumulated independently for every interval (reaction and
//! load moments about the interval start), so the degree-raising rule
//! const -> linear -> quadratic -> cubic is enforced structurally and
//! moment is the integral of shear on every interval by construction.

use crate::analysis::reactions::{moment_reactions, vertical_reactions, Reaction};
use crate::analysis::segment::{DiagramSegment, SegmentKind};
use crate::loads::{Load, LoadKind};

/// Bending moment at `x`, accumulated from everything at or left of it:
/// vertical reactions and loads by force times arm, span loads by their
/// left-portion resultant, moment reactions and applied couples
/// directly.
pub fn moment_at(x: f64, reactions: &[Reaction], loads: &[Load]) -> f64 {
    let mut m = 0.0;
    for (rx, r) in vertical_reactions(reactions) {
        if rx <= x {
            m += r * (x - rx);
        }
    }
    for (rx, rm) in moment_reactions(reactions) {
        if rx <= x {
            m += rm;
        }
    }
    for load in loads {
        match load.kind {
            LoadKind::Point { x: lx, .. } | LoadKind::Angled { x: lx, .. } => {
                if lx <= x {
                    m -= load.vertical_component_total() * (x - lx);
                }
            }
            LoadKind::Udl { .. } | LoadKind::Uvl { .. } => {
                if let Some(trap) = load.as_trapezoid() {
                    m -= trap.moment_of_left_about(x);
                }
            }
            LoadKind::Moment { x: lx, m: lm } => {
                if lx <= x {
                    m += lm;
                }
            }
        }
    }
    m
}

/// Integrate each shear segment into its moment segment
pub fn build_moment_segments(
    shear: &[DiagramSegment],
    reactions: &[Reaction],
    loads: &[Load],
) -> Vec<DiagramSegment> {
    shear
        .iter()
        .map(|vs| {
            let m_a = moment_at(vs.a, reactions, loads);
            let kind = vs.kind.integrated();
            let mut coeffs = Vec::with_capacity(kind.coefficient_count());
            coeffs.push(m_a);
            for (i, s) in vs.coeffs.iter().enumerate() {
                coeffs.push(s / (i as f64 + 1.0));
            }
            DiagramSegment::new(vs.a, vs.b, kind, coeffs)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::events::generate_events;
    use crate::analysis::reactions::solve_reactions;
    use crate::analysis::shear::build_shear_segments;
    use crate::supports::{FixedSide, Support};

    fn diagrams(
        length: f64,
        support: Support,
        loads: Vec<Load>,
    ) -> (Vec<DiagramSegment>, Vec<DiagramSegment>) {
        let reactions = solve_reactions(length, &support, &loads).unwrap();
        let events = generate_events(length, &support, &loads);
        let shear = build_shear_segments(&events, &reactions, &loads);
        let moment = build_moment_segments(&shear, &reactions, &loads);
        (shear, moment)
    }

    #[test]
    fn test_midspan_point_load_peak() {
        let (_, moment) = diagrams(
            30.0,
            Support::pin_roller(0.0, 30.0),
            vec![Load::point(15.0, 60.0)],
        );
        assert_eq!(moment.len(), 2);
        assert_eq!(moment[0].kind, SegmentKind::Linear);
        assert!(moment[0].value_a.abs() < 1e-9);
        assert!((moment[0].value_b - 450.0).abs() < 1e-9);
        assert!((moment[1].value_a - 450.0).abs() < 1e-9);
        assert!(moment[1].value_b.abs() < 1e-9);
    }

    #[test]
    fn test_udl_parabola() {
        let (_, moment) = diagrams(
            30.0,
            Support::pin_roller(0.0, 30.0),
            vec![Load::udl(0.0, 30.0, 10.0)],
        );
        assert_eq!(moment.len(), 1);
        assert_eq!(moment[0].kind, SegmentKind::Quadratic);
        // wL^2/8 = 1125 at midspan, zero at both ends
        assert!(moment[0].value_a.abs() < 1e-9);
        assert!(moment[0].value_b.abs() < 1e-9);
        assert!((moment[0].eval_at(15.0) - 1125.0).abs() < 1e-9);
    }

    #[test]
    fn test_uvl_cubic() {
        let (shear, moment) = diagrams(
            6.0,
            Support::pin_roller(0.0, 6.0),
            vec![Load::uvl(0.0, 6.0, 0.0, 12.0)],
        );
        assert_eq!(shear[0].kind, SegmentKind::Quadratic);
        assert_eq!(moment[0].kind, SegmentKind::Cubic);
        assert!(moment[0].value_a.abs() < 1e-9);
        assert!(moment[0].value_b.abs() < 1e-9);
        // Coefficients are the exact antiderivative of the shear
        assert!((moment[0].coeffs[1] - shear[0].coeffs[0]).abs() < 1e-12);
        assert!((moment[0].coeffs[2] - shear[0].coeffs[1] / 2.0).abs() < 1e-12);
        assert!((moment[0].coeffs[3] - shear[0].coeffs[2] / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_moment_continuity_without_couples() {
        let (_, moment) = diagrams(
            30.0,
            Support::pin_roller(0.0, 30.0),
            vec![
                Load::point(8.0, 40.0),
                Load::udl(12.0, 22.0, 6.0),
                Load::uvl(22.0, 28.0, 0.0, 9.0),
            ],
        );
        for pair in moment.windows(2) {
            assert!(
                (pair[0].value_b - pair[1].value_a).abs() < 1e-9,
                "moment must be continuous at x = {}",
                pair[1].a
            );
        }
    }

    #[test]
    fn test_applied_couple_jump() {
        let (_, moment) = diagrams(
            30.0,
            Support::pin_roller(0.0, 30.0),
            vec![Load::moment(15.0, 300.0)],
        );
        assert_eq!(moment.len(), 2);
        // Couple reactions: pin -10, roller +10; M runs -150 at 15^-,
        // jumps by +300, and closes back to zero at the roller
        assert!((moment[0].value_b + 150.0).abs() < 1e-9);
        assert!((moment[1].value_a - 150.0).abs() < 1e-9);
        assert!(moment[1].value_b.abs() < 1e-9);
    }

    #[test]
    fn test_left_fixed_cantilever() {
        let (shear, moment) = diagrams(
            10.0,
            Support::fixed(FixedSide::Left),
            vec![Load::point(10.0, 20.0)],
        );
        // Constant shear +20 (upward reaction left of every section),
        // moment linear from the -200 wall moment to zero at the tip
        assert_eq!(shear[0].kind, SegmentKind::Const);
        assert!((shear[0].value_a - 20.0).abs() < 1e-9);
        assert!((moment[0].value_a + 200.0).abs() < 1e-9);
        assert!(moment[0].value_b.abs() < 1e-9);
    }

    #[test]
    fn test_right_fixed_cantilever() {
        let (shear, moment) = diagrams(
            10.0,
            Support::fixed(FixedSide::Right),
            vec![Load::point(0.0, 20.0)],
        );
        // Load at the free left tip: shear -20 along the span, moment
        // zero at the tip growing to -200 at the wall
        assert!((shear[0].value_a + 20.0).abs() < 1e-9);
        assert!(moment[0].value_a.abs() < 1e-9);
        assert!((moment[0].value_b + 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_moment_at_matches_polynomials() {
        let loads = vec![Load::udl(5.0, 25.0, 4.0), Load::point(10.0, 18.0)];
        let support = Support::pin_roller(0.0, 30.0);
        let reactions = solve_reactions(30.0, &support, &loads).unwrap();
        let events = generate_events(30.0, &support, &loads);
        let shear = build_shear_segments(&events, &reactions, &loads);
        let moment = build_moment_segments(&shear, &reactions, &loads);

        for seg in &moment {
            let x = seg.a + seg.width() * 0.37;
            let direct = moment_at(x, &reactions, &loads);
            assert!((seg.eval_at(x) - direct).abs() < 1e-8);
        }
    }
}
