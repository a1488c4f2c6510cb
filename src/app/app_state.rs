//! Centralized application state for the timeline viewer.
//!
//! The open plan lives in a `Document`: one shared drag handler, one snap
//! handler reading from it, and the three handles of every interval row.

use std::path::PathBuf;
use rtimeline::{
    create_handle, HandleKind, IntervalId, IntervalStore, Plan, SharedDragHandler,
    TimelineDragHandler, TimelineHandle, TimelineSnapHandler, TimelineZoomController, Timestamp,
};

/// One interval row of the timeline and its handles.
pub struct IntervalRow {
    pub id: IntervalId,
    pub name: String,
    /// Handles in drawing order: start, move, end
    pub handles: Vec<(HandleKind, Box<dyn TimelineHandle>)>,
}

/// An open plan.
pub struct Document {
    /// Interval bounds shared by every handle
    pub drag_handler: SharedDragHandler,
    /// Free-standing snap targets
    pub markers: Vec<Timestamp>,
    pub rows: Vec<IntervalRow>,
    /// File backing the plan (None for unsaved sample plans)
    pub path: Option<PathBuf>,
}

impl Document {
    pub fn new(plan: Plan, store: Box<dyn IntervalStore>, path: Option<PathBuf>) -> Self {
        let drag_handler = TimelineDragHandler::new(plan.intervals.clone(), store).shared();
        let snap_handler = TimelineSnapHandler::new(drag_handler.clone(), plan.markers.clone());

        let rows = plan
            .intervals
            .iter()
            .map(|interval| IntervalRow {
                id: interval.id,
                name: interval.name.clone(),
                handles: [HandleKind::Start, HandleKind::Move, HandleKind::End]
                    .into_iter()
                    .map(|kind| {
                        let handle = create_handle(kind, interval.id, drag_handler.clone(), snap_handler.clone());
                        (kind, handle)
                    })
                    .collect(),
            })
            .collect();

        Self {
            drag_handler,
            markers: plan.markers,
            rows,
            path,
        }
    }

    /// Returns the plan as currently edited.
    pub fn current_plan(&self) -> Plan {
        let intervals = self.drag_handler.borrow().intervals().cloned().collect();
        Plan::new(intervals, self.markers.clone())
    }

    /// Returns true if edits have not reached the store yet.
    pub fn is_dirty(&self) -> bool {
        self.drag_handler.borrow().is_dirty()
    }
}

/// A drag gesture in progress on one handle.
#[derive(Debug, Clone, Copy)]
pub struct ActiveDrag {
    pub row: usize,
    pub kind: HandleKind,
    /// Pixel distance travelled since the gesture started
    pub total_delta: f32,
}

/// Main application state.
pub struct AppState {
    /// Currently open plan
    pub document: Option<Document>,

    /// Zoom level and pixel/time conversion
    pub zoom: TimelineZoomController,

    /// Timestamp shown at the left edge of the timeline
    pub scroll_start: Timestamp,

    /// Drag gesture in progress (if any)
    pub active_drag: Option<ActiveDrag>,

    /// Current error message to display (if any)
    pub error_message: Option<String>,
}

impl AppState {
    pub fn new(zoom: TimelineZoomController) -> Self {
        Self {
            document: None,
            zoom,
            scroll_start: 0,
            active_drag: None,
            error_message: None,
        }
    }

    /// Replaces the open document and resets view state.
    pub fn load_document(&mut self, document: Document) {
        self.scroll_start = document
            .current_plan()
            .extent()
            .map_or(0, |(start, _)| start);
        self.document = Some(document);
        self.active_drag = None;
        self.error_message = None;
    }
}
