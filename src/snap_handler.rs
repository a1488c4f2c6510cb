//! Snap candidates drawn from the other intervals of a timeline.

use crate::drag_handler::SharedDragHandler;
use crate::traits::{IntervalId, SnapHandler, Timestamp};

/// Proposes the edges of every other interval, plus plan markers, as
/// snap-to locations.
///
/// Reads the shared drag handler on every call so candidates follow
/// edits made during the current gesture.
#[derive(Clone)]
pub struct TimelineSnapHandler {
    drag_handler: SharedDragHandler,
    markers: Vec<Timestamp>,
}

impl TimelineSnapHandler {
    pub fn new(drag_handler: SharedDragHandler, markers: Vec<Timestamp>) -> Self {
        Self { drag_handler, markers }
    }

    /// Returns every candidate not contributed by `exclude`.
    pub fn candidates(&self, exclude: IntervalId) -> Vec<Timestamp> {
        let drag_handler = self.drag_handler.borrow();
        let candidates = drag_handler
            .intervals()
            .filter(|interval| interval.id != exclude)
            .flat_map(|interval| [interval.start, interval.end])
            .chain(self.markers.iter().copied())
            .collect();
        candidates
    }
}

impl SnapHandler for TimelineSnapHandler {
    fn snap(&self, timestamp: Timestamp, tolerance: Timestamp, exclude: IntervalId) -> Timestamp {
        nearest_candidate(&self.candidates(exclude), timestamp, tolerance).unwrap_or(timestamp)
    }
}

/// Finds the candidate closest to `timestamp` within `tolerance`.
///
/// Equidistant candidates resolve to the earlier one.
pub fn nearest_candidate(candidates: &[Timestamp], timestamp: Timestamp, tolerance: Timestamp) -> Option<Timestamp> {
    candidates
        .iter()
        .copied()
        .filter(|candidate| (candidate - timestamp).abs() <= tolerance)
        .min_by_key(|candidate| ((candidate - timestamp).abs(), *candidate))
}
