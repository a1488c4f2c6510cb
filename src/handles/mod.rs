//! Drag handles for timeline intervals.
//!
//! Every interval shown on the timeline carries three handles:
//! - Start handle (resizes from the left edge)
//! - Move handle (shifts the whole interval, snapping either edge)
//! - End handle (resizes from the right edge)
//!
//! A view layer calls `begin` when a drag gesture starts, `drag` with the
//! cumulative pixel delta as the pointer moves, and `finish` on release.

mod end_handle;
mod move_handle;
mod start_handle;
mod style;

#[cfg(test)]
pub(crate) mod doubles;

pub use end_handle::EndHandle;
pub use move_handle::MoveHandle;
pub use start_handle::StartHandle;
pub use style::HandleStyle;

use crate::traits::{DragHandler, IntervalId, Pixels, SnapHandler, ZoomController};

/// The kind of handle - determines what manipulation it performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    Start,
    Move,
    End,
}

/// Common interface of the three interval handles.
pub trait TimelineHandle {
    /// The interval this handle manipulates
    fn id(&self) -> IntervalId;

    /// Starts a drag gesture, snapshotting the interval's current state
    fn begin(&mut self);

    /// Applies the drag gesture so far.
    ///
    /// `delta` is the pixel distance from where the gesture started.
    /// Ignored unless `begin` was called first.
    fn drag(&mut self, delta: Pixels, zoom: &dyn ZoomController);

    /// Ends the drag gesture and persists the result
    fn finish(&mut self) -> anyhow::Result<()>;

    /// Returns where the handle should be drawn at the given zoom
    fn style(&self, zoom: &dyn ZoomController) -> HandleStyle;

    /// Returns true if a drag gesture is in progress
    fn is_dragging(&self) -> bool;
}

/// Builds a boxed handle of the given kind for one interval.
///
/// The drag and snap handlers are typically shared (`Rc`-backed), so each
/// handle receives its own clone.
pub fn create_handle<D, S>(kind: HandleKind, id: IntervalId, drag_handler: D, snap_handler: S) -> Box<dyn TimelineHandle>
where
    D: DragHandler + 'static,
    S: SnapHandler + 'static,
{
    match kind {
        HandleKind::Start => Box::new(StartHandle::new(id, drag_handler, snap_handler)),
        HandleKind::Move => Box::new(MoveHandle::new(id, drag_handler, snap_handler)),
        HandleKind::End => Box::new(EndHandle::new(id, drag_handler, snap_handler)),
    }
}

#[cfg(test)]
mod tests {
    use super::doubles::{FixedScale, RecordingDragHandler, ScriptedSnap};
    use super::*;
    use crate::constants::HANDLE_WIDTH;

    #[test]
    fn test_create_handle_kinds() {
        let zoom = FixedScale::new(10.0);
        let mut styles = Vec::new();

        for kind in [HandleKind::Start, HandleKind::Move, HandleKind::End] {
            let drag = RecordingDragHandler::with_interval(7, 1000, 5000);
            let handle = create_handle(kind, 7, drag, ScriptedSnap::none());
            assert_eq!(handle.id(), 7);
            assert!(!handle.is_dragging());
            styles.push(handle.style(&zoom));
        }

        assert_eq!(styles[0], HandleStyle::new(100.0, HANDLE_WIDTH));
        assert_eq!(styles[1], HandleStyle::new(100.0 + HANDLE_WIDTH, 400.0 - 2.0 * HANDLE_WIDTH));
        assert_eq!(styles[2], HandleStyle::new(500.0 - HANDLE_WIDTH, HANDLE_WIDTH));
    }
}
