use std::cell::RefCell;
use std::rc::Rc;

/// Type alias for interval IDs (domain identifiers from plan files)
pub type IntervalId = u64;

/// Milliseconds since the timeline epoch
pub type Timestamp = i64;

/// Horizontal screen distance
pub type Pixels = f64;

/// Trait for reading and mutating the bounds of timeline intervals.
///
/// Mutations are incremental and may be called many times during a
/// single drag session; `persist` commits whatever accumulated.
pub trait DragHandler {
    /// Returns the start of the interval
    fn start(&self, id: IntervalId) -> Timestamp;

    /// Returns the end of the interval
    fn end(&self, id: IntervalId) -> Timestamp;

    /// Returns the computed duration (end - start)
    fn duration(&self, id: IntervalId) -> Timestamp;

    /// Shifts both edges of the interval by `delta` milliseconds
    fn move_by(&mut self, id: IntervalId, delta: Timestamp);

    /// Moves the start edge to an absolute timestamp, keeping the end fixed
    fn set_start(&mut self, id: IntervalId, value: Timestamp);

    /// Moves the end edge to an absolute timestamp, keeping the start fixed
    fn set_end(&mut self, id: IntervalId, value: Timestamp);

    /// Commits accumulated changes to durable storage
    fn persist(&mut self) -> anyhow::Result<()>;
}

/// Trait for proposing snap-to locations
pub trait SnapHandler {
    /// Returns the nearest candidate within `tolerance` of `timestamp`,
    /// never one contributed by `exclude` itself. Returns `timestamp`
    /// unchanged when nothing is close enough.
    fn snap(&self, timestamp: Timestamp, tolerance: Timestamp, exclude: IntervalId) -> Timestamp;
}

/// Trait for converting between screen and time units at the current zoom
pub trait ZoomController {
    /// Converts a pixel distance to milliseconds
    fn to_millis(&self, pixels: Pixels) -> Timestamp;

    /// Converts milliseconds to a pixel distance
    fn to_pixels(&self, millis: Timestamp) -> Pixels;
}

// Shared handlers: the viewer hands the same interval state to every
// handle and to the snap handler. Borrows never outlive a single call.
impl<T: DragHandler> DragHandler for Rc<RefCell<T>> {
    fn start(&self, id: IntervalId) -> Timestamp {
        self.borrow().start(id)
    }

    fn end(&self, id: IntervalId) -> Timestamp {
        self.borrow().end(id)
    }

    fn duration(&self, id: IntervalId) -> Timestamp {
        self.borrow().duration(id)
    }

    fn move_by(&mut self, id: IntervalId, delta: Timestamp) {
        self.borrow_mut().move_by(id, delta);
    }

    fn set_start(&mut self, id: IntervalId, value: Timestamp) {
        self.borrow_mut().set_start(id, value);
    }

    fn set_end(&mut self, id: IntervalId, value: Timestamp) {
        self.borrow_mut().set_end(id, value);
    }

    fn persist(&mut self) -> anyhow::Result<()> {
        self.borrow_mut().persist()
    }
}
