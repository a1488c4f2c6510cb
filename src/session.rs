//! Drag session state.
//!
//! This module encapsulates the snapshot a handle takes when a drag
//! gesture begins. Snap targets are computed against this snapshot rather
//! than the live interval so rounding does not accumulate across the many
//! small drag events of one gesture.

use crate::traits::Timestamp;

/// Both edges of an interval as they were when the session began.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitialBounds {
    pub start: Timestamp,
    pub end: Timestamp,
}

/// State of a single drag gesture.
///
/// Responsibilities:
/// - Holding the snapshot captured by `begin`
/// - Distinguishing idle from dragging
/// - Clearing the snapshot when the gesture finishes
#[derive(Debug, Clone, Default)]
pub struct DragSession<T> {
    /// Snapshot captured at `begin`, `None` while idle
    initial: Option<T>,
}

impl<T: Copy> DragSession<T> {
    /// Creates an idle session.
    pub fn new() -> Self {
        Self { initial: None }
    }

    /// Starts (or restarts) a session with the given snapshot.
    ///
    /// An abandoned session is simply overwritten.
    pub fn begin(&mut self, initial: T) {
        self.initial = Some(initial);
    }

    /// Ends the session, returning the snapshot it held, if any.
    pub fn clear(&mut self) -> Option<T> {
        self.initial.take()
    }

    // ===== Session Queries =====

    /// Returns the snapshot if a session is in progress.
    pub fn initial(&self) -> Option<T> {
        self.initial
    }

    /// Returns true if a drag gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.initial.is_some()
    }
}
