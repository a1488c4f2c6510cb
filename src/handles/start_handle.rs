//! Handle for resizing an interval from its start edge.

use crate::constants::{HANDLE_WIDTH, SNAP_WIDTH};
use crate::handles::{HandleStyle, TimelineHandle};
use crate::session::DragSession;
use crate::traits::{DragHandler, IntervalId, Pixels, SnapHandler, Timestamp, ZoomController};

pub struct StartHandle<D, S> {
    id: IntervalId,
    drag_handler: D,
    snap_handler: S,
    session: DragSession<Timestamp>,
}

impl<D: DragHandler, S: SnapHandler> StartHandle<D, S> {
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

impl<D: DragHandler, S: SnapHandler> TimelineHandle for StartHandle<D, S> {
    fn id(&self) -> IntervalId {
        self.id
    }

    fn begin(&mut self) {
        self.session.begin(self.drag_handler.start(self.id));
    }

    fn drag(&mut self, delta: Pixels, zoom: &dyn ZoomController) {
        if let Some(initial) = self.session.initial() {
            let snapped = self.snap_handler.snap(
                initial + zoom.to_millis(delta),
                zoom.to_millis(SNAP_WIDTH),
                self.id,
            );
            self.drag_handler.set_start(self.id, snapped);
        }
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        self.session.clear();
        self.drag_handler.persist()
    }

    fn style(&self, zoom: &dyn ZoomController) -> HandleStyle {
        HandleStyle::new(zoom.to_pixels(self.drag_handler.start(self.id)), HANDLE_WIDTH)
    }

    fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }
}
