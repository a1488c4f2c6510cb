//! Handle for moving a whole interval by drag.

use crate::constants::{HANDLE_WIDTH, SNAP_WIDTH};
use crate::handles::{HandleStyle, TimelineHandle};
use crate::session::{DragSession, InitialBounds};
use crate::snapping::{self, Edge};
use crate::traits::{DragHandler, IntervalId, Pixels, SnapHandler, Timestamp, ZoomController};

/// Moves an activity or sub-timeline, aligning whichever edge lands
/// closest to a snap candidate.
pub struct MoveHandle<D, S> {
    id: IntervalId,
    drag_handler: D,
    snap_handler: S,
    session: DragSession<InitialBounds>,
}

impl<D: DragHandler, S: SnapHandler> MoveHandle<D, S> {
    pub fn new(id: IntervalId, drag_handler: D, snap_handler: S) -> Self {
        Self {
            id,
            drag_handler,
            snap_handler,
            session: DragSession::new(),
        }
    }

    /// Returns the drag handler this handle mutates.
    pub fn drag_handler(&self) -> &D {
        &self.drag_handler
    }

    /// Converts a pixel delta to a millisecond delta, relative to the
    /// interval's current state, that aligns one edge with a snap location.
    fn snap_delta(&self, initial: InitialBounds, delta: Pixels, zoom: &dyn ZoomController) -> Timestamp {
        let time_delta = zoom.to_millis(delta);
        let tolerance = zoom.to_millis(SNAP_WIDTH);
        let edges = snapping::snap_edges(
            &self.snap_handler,
            self.id,
            initial.start,
            initial.end,
            time_delta,
            tolerance,
        );
        let edge = edges.chosen_edge();

        // Snapping is anchored to the initial state, but move_by is
        // incremental, so re-base on the live position of the chosen edge.
        let current = match edge {
            Edge::Start => self.drag_handler.start(self.id),
            Edge::End => self.drag_handler.end(self.id),
        };

        log::debug!(
            "interval {}: drag {}px -> {}ms, diff start={} end={}, aligning {:?}",
            self.id,
            delta,
            time_delta,
            edges.diff_start(),
            edges.diff_end(),
            edge
        );

        edges.snapped(edge) - current
    }
}

impl<D: DragHandler, S: SnapHandler> TimelineHandle for MoveHandle<D, S> {
    fn id(&self) -> IntervalId {
        self.id
    }

    fn begin(&mut self) {
        self.session.begin(InitialBounds {
            start: self.drag_handler.start(self.id),
            end: self.drag_handler.end(self.id),
        });
    }

    fn drag(&mut self, delta: Pixels, zoom: &dyn ZoomController) {
        let Some(initial) = self.session.initial() else {
            return;
        };
        if delta == 0.0 {
            return;
        }

        let applied = self.snap_delta(initial, delta, zoom);
        self.drag_handler.move_by(self.id, applied);
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        self.session.clear();
        self.drag_handler.persist()
    }

    fn style(&self, zoom: &dyn ZoomController) -> HandleStyle {
        HandleStyle::new(
            zoom.to_pixels(self.drag_handler.start(self.id)) + HANDLE_WIDTH,
            zoom.to_pixels(self.drag_handler.duration(self.id)) - HANDLE_WIDTH * 2.0,
        )
    }

    fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }
}
