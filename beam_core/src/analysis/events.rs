//! # Event Generator
//!
//! The sorted, duplicate-free x positions where the governing shear or
//! moment polynomial can change: the beam ends, the supports, and every
//! load boundary. These knots define the segmentation used by both
//! diagram builders and must be regenerated whenever a load or support
//! changes.

use crate::loads::{Load, LoadKind};
use crate::supports::Support;

/// Positions closer than this are merged into one event
pub const EVENT_MERGE_EPS: f64 = 1e-9;

/// Generate the event (knot) positions for a beam of the given length.
///
/// The output is strictly increasing with no duplicates, always starts
/// at 0 and ends at `length`, and is independent of the ordering of the
/// load collection. Positions outside `[0, length]` are ignored.
pub fn generate_events(length: f64, support: &Support, loads: &[Load]) -> Vec<f64> {
    let mut positions = vec![0.0, length];
    positions.extend(support.positions(length));

    for load in loads {
        match load.kind {
            LoadKind::Point { x, .. }
            | LoadKind::Angled { x, .. }
            | LoadKind::Moment { x, .. } => positions.push(x),
            LoadKind::Udl { a, b, .. } | LoadKind::Uvl { a, b, .. } => {
                positions.push(a);
                positions.push(b);
            }
        }
    }

    positions.retain(|&x| x >= -EVENT_MERGE_EPS && x <= length + EVENT_MERGE_EPS);
    positions.sort_by(|a, b| a.partial_cmp(b).unwrap());
    positions.dedup_by(|a, b| (*a - *b).abs() < EVENT_MERGE_EPS);
    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_events() {
        let support = Support::pin_roller(0.0, 30.0);
        let loads = vec![Load::point(15.0, 60.0)];
        let events = generate_events(30.0, &support, &loads);
        assert_eq!(events, vec![0.0, 15.0, 30.0]);
    }

    #[test]
    fn test_span_load_boundaries() {
        let support = Support::pin_roller(0.0, 30.0);
        let loads = vec![Load::udl(5.0, 12.0, 10.0), Load::uvl(12.0, 20.0, 0.0, 8.0)];
        let events = generate_events(30.0, &support, &loads);
        assert_eq!(events, vec![0.0, 5.0, 12.0, 20.0, 30.0]);
    }

    #[test]
    fn test_order_independence() {
        let support = Support::pin_roller(2.0, 28.0);
        let mut loads = vec![
            Load::point(7.0, 1.0),
            Load::udl(10.0, 18.0, 2.0),
            Load::moment(22.0, 5.0),
        ];
        let forward = generate_events(30.0, &support, &loads);
        loads.reverse();
        let backward = generate_events(30.0, &support, &loads);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_idempotent_and_deduped() {
        let support = Support::pin_roller(0.0, 30.0);
        // Load boundary coincides with a support and with another load
        let loads = vec![Load::point(30.0, 5.0), Load::udl(0.0, 30.0, 1.0)];
        let events = generate_events(30.0, &support, &loads);
        assert_eq!(events, vec![0.0, 30.0]);

        let again = generate_events(30.0, &support, &loads);
        assert_eq!(events, again);
    }

    #[test]
    fn test_strictly_increasing() {
        let support = Support::pin_roller(3.0, 27.0);
        let loads = vec![
            Load::udl(1.0, 9.0, 4.0),
            Load::point(9.0, 2.0),
            Load::uvl(9.0, 14.0, 0.0, 3.0),
        ];
        let events = generate_events(30.0, &support, &loads);
        assert!(events.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(*events.first().unwrap(), 0.0);
        assert_eq!(*events.last().unwrap(), 30.0);
    }

    #[test]
    fn test_out_of_range_positions_ignored() {
        let support = Support::pin_roller(0.0, 10.0);
        let loads = vec![Load::point(50.0, 5.0)];
        let events = generate_events(10.0, &support, &loads);
        assert_eq!(events, vec![0.0, 10.0]);
    }
}
