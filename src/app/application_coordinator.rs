//! Application-level coordination of plan files and drag gestures.

use std::path::PathBuf;
use rtimeline::{JsonFileStore, MemoryStore, SamplePlanGenerator, TimelineHandle};
use crate::app::{ActiveDrag, AppState, Document};

/// Coordinates file operations and routes drag gestures to handles.
pub struct ApplicationCoordinator;

impl ApplicationCoordinator {
    /// Opens a plan file; edits are written back to the same file.
    pub fn open_file(state: &mut AppState, path: PathBuf) {
        match JsonFileStore::open(&path) {
            Ok((store, plan)) => {
                log::info!("Opened plan {} ({} intervals)", path.display(), plan.intervals.len());
                state.load_document(Document::new(plan, Box::new(store), Some(path)));
            }
            Err(err) => {
                log::warn!("Failed to open {}: {:#}", path.display(), err);
                state.error_message = Some(format!("{:#}", err));
            }
        }
    }

    /// Opens a generated plan kept in memory until saved.
    pub fn open_sample_plan(state: &mut AppState) {
        let plan = SamplePlanGenerator::new().generate();
        state.load_document(Document::new(plan, Box::new(MemoryStore::new()), None));
    }

    /// Writes the current plan to `path` and persists future edits there.
    pub fn save_as(state: &mut AppState, path: PathBuf) {
        let Some(document) = state.document.as_mut() else {
            return;
        };

        match JsonFileStore::create(&path, &document.current_plan()) {
            Ok(store) => {
                document.drag_handler.borrow_mut().set_store(Box::new(store));
                document.path = Some(path);
                state.error_message = None;
            }
            Err(err) => state.error_message = Some(format!("{:#}", err)),
        }
    }

    /// Handles the start of a drag gesture on a handle.
    pub fn begin_drag(state: &mut AppState, drag: ActiveDrag) {
        if let Some(handle) = Self::handle_mut(state, drag) {
            handle.begin();
            state.active_drag = Some(drag);
        }
    }

    /// Adds this frame's pointer movement to the active gesture.
    pub fn continue_drag(state: &mut AppState, frame_delta: f32) {
        let Some(mut drag) = state.active_drag else {
            return;
        };
        drag.total_delta += frame_delta;
        state.active_drag = Some(drag);

        let AppState { document, zoom, .. } = state;
        if let Some(handle) = document
            .as_mut()
            .and_then(|document| document.rows.get_mut(drag.row))
            .and_then(|row| row.handles.iter_mut().find(|(kind, _)| *kind == drag.kind))
            .map(|(_, handle)| handle)
        {
            handle.drag(f64::from(drag.total_delta), &*zoom);
        }
    }

    /// Ends the active gesture and persists the result.
    pub fn finish_drag(state: &mut AppState) {
        let Some(drag) = state.active_drag.take() else {
            return;
        };

        if let Some(handle) = Self::handle_mut(state, drag) {
            if let Err(err) = handle.finish() {
                log::warn!("Failed to persist drag: {:#}", err);
                state.error_message = Some(format!("{:#}", err));
            }
        }
    }

    fn handle_mut(state: &mut AppState, drag: ActiveDrag) -> Option<&mut Box<dyn TimelineHandle>> {
        state
            .document
            .as_mut()?
            .rows
            .get_mut(drag.row)?
            .handles
            .iter_mut()
            .find(|(kind, _)| *kind == drag.kind)
            .map(|(_, handle)| handle)
    }
}
