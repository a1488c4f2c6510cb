//! Interval state shared by all handles of a timeline.
//!
//! `TimelineDragHandler` owns the bounds of every interval in a plan,
//! applies the incremental edits requested by drag handles, and commits
//! them to an `IntervalStore` when a gesture finishes.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;
use anyhow::Context;
use crate::plan::Interval;
use crate::store::IntervalStore;
use crate::traits::{DragHandler, IntervalId, Timestamp};

/// Drag handler shared between handles and the snap handler.
pub type SharedDragHandler = Rc<RefCell<TimelineDragHandler>>;

/// Edits interval bounds and persists them.
///
/// Bounds are kept inside the timeline: no interval starts before the
/// epoch (0) and no interval ends before it starts.
pub struct TimelineDragHandler {
    intervals: BTreeMap<IntervalId, Interval>,
    dirty: BTreeSet<IntervalId>,
    store: Box<dyn IntervalStore>,
}

impl TimelineDragHandler {
    pub fn new(intervals: Vec<Interval>, store: Box<dyn IntervalStore>) -> Self {
        Self {
            intervals: intervals.into_iter().map(|i| (i.id, i)).collect(),
            dirty: BTreeSet::new(),
            store,
        }
    }

    /// Wraps the handler for sharing between handles.
    pub fn shared(self) -> SharedDragHandler {
        Rc::new(RefCell::new(self))
    }

    // ===== Queries =====

    /// Returns the IDs of all intervals, in ascending order.
    pub fn list(&self) -> Vec<IntervalId> {
        self.intervals.keys().copied().collect()
    }

    /// Gets an interval by ID.
    pub fn interval(&self, id: IntervalId) -> Option<&Interval> {
        self.intervals.get(&id)
    }

    /// Iterates over all intervals in ID order.
    pub fn intervals(&self) -> impl Iterator<Item = &Interval> {
        self.intervals.values()
    }

    /// Returns true if there are edits that have not been persisted.
    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Replaces the store used by `persist` (e.g. after "Save As").
    pub fn set_store(&mut self, store: Box<dyn IntervalStore>) {
        self.store = store;
    }

    fn bounds(&self, id: IntervalId) -> Option<(Timestamp, Timestamp)> {
        match self.intervals.get(&id) {
            Some(interval) => Some((interval.start, interval.end)),
            None => {
                log::warn!("Unknown interval id {}", id);
                None
            }
        }
    }

    fn update(&mut self, id: IntervalId, edit: impl FnOnce(&mut Interval)) {
        match self.intervals.get_mut(&id) {
            Some(interval) => {
                edit(interval);
                self.dirty.insert(id);
            }
            None => log::warn!("Ignoring edit of unknown interval id {}", id),
        }
    }
}

impl DragHandler for TimelineDragHandler {
    fn start(&self, id: IntervalId) -> Timestamp {
        self.bounds(id).map_or(0, |(start, _)| start)
    }

    fn end(&self, id: IntervalId) -> Timestamp {
        self.bounds(id).map_or(0, |(_, end)| end)
    }

    fn duration(&self, id: IntervalId) -> Timestamp {
        self.bounds(id).map_or(0, |(start, end)| end - start)
    }

    fn move_by(&mut self, id: IntervalId, delta: Timestamp) {
        self.update(id, |interval| {
            // Never pulls the start below 0, and never pushes an interval
            // that already starts before 0 further than asked.
            let delta = delta.max(-interval.start.max(0)).min(delta.max(0));
            interval.start += delta;
            interval.end += delta;
        });
    }

    fn set_start(&mut self, id: IntervalId, value: Timestamp) {
        self.update(id, |interval| {
            interval.start = value.clamp(0, interval.end.max(0));
        });
    }

    fn set_end(&mut self, id: IntervalId, value: Timestamp) {
        self.update(id, |interval| {
            interval.end = value.max(interval.start);
        });
    }

    fn persist(&mut self) -> anyhow::Result<()> {
        if self.dirty.is_empty() {
            log::debug!("Nothing to persist");
            return Ok(());
        }

        let intervals: Vec<Interval> = self.intervals.values().cloned().collect();
        self.store
            .save(&intervals)
            .with_context(|| format!("Failed to persist {} edited intervals", self.dirty.len()))?;

        log::info!("Persisted {} edited intervals", self.dirty.len());
        self.dirty.clear();
        Ok(())
    }
}
