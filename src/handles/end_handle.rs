//! Handle for resizing an interval from its end edge.

use crate::constants::{HANDLE_WIDTH, SNAP_WIDTH};
use crate::handles::{HandleStyle, TimelineHandle};
use crate::session::DragSession;
use crate::traits::{DragHandler, IntervalId, Pixels, SnapHandler, Timestamp, ZoomController};

pub struct EndHandle<D, S> {
    id: IntervalId,
    drag_handler: D,
    snap_handler: S,
    session: DragSession<Timestamp>,
}

impl<D: DragHandler, S: SnapHandler> EndHandle<D, S> {
    pub fn new(id: IntervalId, drag_handler: D, snap_handler: S) -> Self {
        Self {
            id,
            drag_handler,
            snap_handler,
            session: DragSession::new(),
        }
    }

    pub fn drag_handler(&self) -> &D {
        &self.drag_handler
    }
}

impl<D: DragHandler, S: SnapHandler> TimelineHandle for EndHandle<D, S> {
    fn id(&self) -> IntervalId {
        self.id
    }

    fn begin(&mut self) {
        self.session.begin(self.drag_handler.end(self.id));
    }

    fn drag(&mut self, delta: Pixels, zoom: &dyn ZoomController) {
        if let Some(initial) = self.session.initial() {
            let snapped = self.snap_handler.snap(
                initial + zoom.to_millis(delta),
                zoom.to_millis(SNAP_WIDTH),
                self.id,
            );
            self.drag_handler.set_end(self.id, snapped);
        }
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        self.session.clear();
        self.drag_handler.persist()
    }

    fn style(&self, zoom: &dyn ZoomController) -> HandleStyle {
        HandleStyle::new(
            zoom.to_pixels(self.drag_handler.end(self.id)) - HANDLE_WIDTH,
            HANDLE_WIDTH,
        )
    }

    fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handles::doubles::{FixedScale, RecordingDragHandler, ScriptedSnap};

    #[test]
    fn test_drag_sets_end_from_initial() {
        let mut handle = EndHandle::new(9, RecordingDragHandler::with_interval(9, 1000, 5000), ScriptedSnap::none());
        let zoom = FixedScale::new(10.0);
        handle.begin();
        handle.drag(10.0, &zoom);
        handle.drag(25.0, &zoom);

        assert_eq!(handle.drag_handler().bounds[&9], (1000, 5250));
    }

    #[test]
    fn test_zero_delta_still_snaps_end() {
        let snap = ScriptedSnap::none().answer(5000, 4990);
        let mut handle = EndHandle::new(9, RecordingDragHandler::with_interval(9, 1000, 5000), snap);
        handle.begin();
        handle.drag(0.0, &FixedScale::new(10.0));

        assert_eq!(handle.drag_handler().bounds[&9], (1000, 4990));
    }

    #[test]
    fn test_finish_persists_once() {
        let mut handle = EndHandle::new(9, RecordingDragHandler::with_interval(9, 1000, 5000), ScriptedSnap::none());
        handle.begin();
        handle.drag(10.0, &FixedScale::new(10.0));
        handle.finish().unwrap();

        assert_eq!(handle.drag_handler().persist_count, 1);
    }
}
