//! Hand-written collaborators for handle tests.

use std::cell::Cell;
use std::collections::HashMap;

use crate::traits::{DragHandler, IntervalId, Pixels, SnapHandler, Timestamp, ZoomController};

/// Drag handler that applies mutations to an in-memory map and records them
#[derive(Default)]
pub struct RecordingDragHandler {
    pub bounds: HashMap<IntervalId, (Timestamp, Timestamp)>,
    pub moves: Vec<(IntervalId, Timestamp)>,
    pub persist_count: usize,
    pub fail_persist: bool,
}

impl RecordingDragHandler {
    pub fn with_interval(id: IntervalId, start: Timestamp, end: Timestamp) -> Self {
        let mut handler = Self::default();
        handler.bounds.insert(id, (start, end));
        handler
    }
}

impl DragHandler for RecordingDragHandler {
    fn start(&self, id: IntervalId) -> Timestamp {
        self.bounds[&id].0
    }

    fn end(&self, id: IntervalId) -> Timestamp {
        self.bounds[&id].1
    }

    fn duration(&self, id: IntervalId) -> Timestamp {
        let (start, end) = self.bounds[&id];
        end - start
    }

    fn move_by(&mut self, id: IntervalId, delta: Timestamp) {
        self.moves.push((id, delta));
        if let Some(bounds) = self.bounds.get_mut(&id) {
            bounds.0 += delta;
            bounds.1 += delta;
        }
    }

    fn set_start(&mut self, id: IntervalId, value: Timestamp) {
        if let Some(bounds) = self.bounds.get_mut(&id) {
            bounds.0 = value;
        }
    }

    fn set_end(&mut self, id: IntervalId, value: Timestamp) {
        if let Some(bounds) = self.bounds.get_mut(&id) {
            bounds.1 = value;
        }
    }

    fn persist(&mut self) -> anyhow::Result<()> {
        self.persist_count += 1;
        if self.fail_persist {
            anyhow::bail!("store unavailable");
        }
        Ok(())
    }
}

/// Snap handler returning scripted answers for specific desired timestamps
#[derive(Default)]
pub struct ScriptedSnap {
    answers: HashMap<Timestamp, Timestamp>,
    pub calls: Cell<usize>,
    pub last_tolerance: Cell<Option<Timestamp>>,
}

impl ScriptedSnap {
    /// A snap handler that never finds a candidate.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn answer(mut self, desired: Timestamp, snapped: Timestamp) -> Self {
        self.answers.insert(desired, snapped);
        self
    }
}

impl SnapHandler for ScriptedSnap {
    fn snap(&self, timestamp: Timestamp, tolerance: Timestamp, _exclude: IntervalId) -> Timestamp {
        self.calls.set(self.calls.get() + 1);
        self.last_tolerance.set(Some(tolerance));
        self.answers.get(&timestamp).copied().unwrap_or(timestamp)
    }
}

/// Zoom with a constant number of milliseconds per pixel
pub struct FixedScale {
    millis_per_pixel: f64,
}

impl FixedScale {
    pub fn new(millis_per_pixel: f64) -> Self {
        Self { millis_per_pixel }
    }
}

impl ZoomController for FixedScale {
    fn to_millis(&self, pixels: Pixels) -> Timestamp {
        (pixels * self.millis_per_pixel).round() as Timestamp
    }

    fn to_pixels(&self, millis: Timestamp) -> Pixels {
        millis as f64 / self.millis_per_pixel
    }
}
