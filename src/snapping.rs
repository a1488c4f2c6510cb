//! Edge snapping for whole-interval moves.
//!
//! This module provides the pure part of the move handle's behaviour:
//! - Computing where each edge would land for a given time delta
//! - Asking the snap handler for a target on each edge
//! - Picking which edge the move should align to
//!
//! These functions are stateless and can be tested independently.

use crate::traits::{IntervalId, SnapHandler, Timestamp};

/// Which boundary of an interval a move aligns to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Start,
    End,
}

/// Desired and snapped positions of both edges for one drag step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSnap {
    pub desired_start: Timestamp,
    pub desired_end: Timestamp,
    pub snapped_start: Timestamp,
    pub snapped_end: Timestamp,
}

impl EdgeSnap {
    /// Distance the start edge was pulled by snapping (0 = no snap).
    pub fn diff_start(&self) -> Timestamp {
        (self.snapped_start - self.desired_start).abs()
    }

    /// Distance the end edge was pulled by snapping (0 = no snap).
    pub fn diff_end(&self) -> Timestamp {
        (self.snapped_end - self.desired_end).abs()
    }

    /// Returns the edge the move should align to.
    pub fn chosen_edge(&self) -> Edge {
        choose_edge(self.diff_start(), self.diff_end())
    }

    /// Returns the snapped absolute position of the given edge.
    pub fn snapped(&self, edge: Edge) -> Timestamp {
        match edge {
            Edge::Start => self.snapped_start,
            Edge::End => self.snapped_end,
        }
    }
}

/// Chooses which edge to align to from the snap distance of each edge.
///
/// When both edges snapped, the smaller adjustment wins and a tie goes to
/// the start edge. Otherwise the end edge is chosen only if it snapped, so
/// no snap at all falls back to the start edge.
///
/// # Arguments
/// * `diff_start` - Distance the start edge was pulled by snapping
/// * `diff_end` - Distance the end edge was pulled by snapping
pub fn choose_edge(diff_start: Timestamp, diff_end: Timestamp) -> Edge {
    let choose_end = if diff_start > 0 && diff_end > 0 {
        diff_end < diff_start
    } else {
        diff_end > 0
    };

    if choose_end {
        Edge::End
    } else {
        Edge::Start
    }
}

/// Snaps both edges of an interval shifted by `time_delta`.
///
/// # Arguments
/// * `snap_handler` - Source of snap candidates
/// * `id` - The interval being moved (never snapped to itself)
/// * `initial_start` - Start of the interval when the drag began
/// * `initial_end` - End of the interval when the drag began
/// * `time_delta` - Total time delta since the drag began
/// * `tolerance` - Maximum snap distance in milliseconds
pub fn snap_edges<S: SnapHandler + ?Sized>(
    snap_handler: &S,
    id: IntervalId,
    initial_start: Timestamp,
    initial_end: Timestamp,
    time_delta: Timestamp,
    tolerance: Timestamp,
) -> EdgeSnap {
    let desired_start = initial_start + time_delta;
    let desired_end = initial_end + time_delta;

    EdgeSnap {
        desired_start,
        desired_end,
        snapped_start: snap_handler.snap(desired_start, tolerance, id),
        snapped_end: snap_handler.snap(desired_end, tolerance, id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Snaps to a fixed list of candidates, ignoring the exclusion id
    struct FixedSnap(Vec<Timestamp>);

    impl SnapHandler for FixedSnap {
        fn snap(&self, timestamp: Timestamp, tolerance: Timestamp, _exclude: IntervalId) -> Timestamp {
            self.0
                .iter()
                .copied()
                .filter(|c| (c - timestamp).abs() <= tolerance)
                .min_by_key(|c| (c - timestamp).abs())
                .unwrap_or(timestamp)
        }
    }

    #[test]
    fn test_no_snap_chooses_start() {
        assert_eq!(choose_edge(0, 0), Edge::Start);
    }

    #[test]
    fn test_single_edge_snap() {
        assert_eq!(choose_edge(0, 30), Edge::End);
        assert_eq!(choose_edge(30, 0), Edge::Start);
    }

    #[test]
    fn test_both_snapped_smaller_diff_wins() {
        assert_eq!(choose_edge(40, 10), Edge::End);
        assert_eq!(choose_edge(10, 40), Edge::Start);
    }

    #[test]
    fn test_tie_goes_to_start() {
        assert_eq!(choose_edge(25, 25), Edge::Start);
    }

    #[test]
    fn test_snap_edges_computes_desired_from_initial() {
        let snap = FixedSnap(vec![5000]);
        let result = snap_edges(&snap, 1, 1000, 5000, 50, 160);

        assert_eq!(result.desired_start, 1050);
        assert_eq!(result.desired_end, 5050);
        assert_eq!(result.snapped_start, 1050);
        assert_eq!(result.snapped_end, 5000);
        assert_eq!(result.diff_start(), 0);
        assert_eq!(result.diff_end(), 50);
        assert_eq!(result.chosen_edge(), Edge::End);
        assert_eq!(result.snapped(Edge::End), 5000);
    }

    #[test]
    fn test_snap_edges_out_of_tolerance() {
        let snap = FixedSnap(vec![9000]);
        let result = snap_edges(&snap, 1, 1000, 5000, -200, 100);

        assert_eq!(result.snapped_start, 800);
        assert_eq!(result.snapped_end, 4800);
        assert_eq!(result.chosen_edge(), Edge::Start);
    }
}
