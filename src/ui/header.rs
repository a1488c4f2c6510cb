//! Header panel UI rendering
//!
//! Handles the top menu bar with file controls, zoom buttons and panning.

use eframe::egui;
use egui::Color32;
use std::path::PathBuf;
use rtimeline::ZoomController;
use crate::app::AppState;
use crate::utils::{format_duration, format_timestamp};

/// Pixels scrolled by one pan button press
const PAN_STEP_PX: f64 = 200.0;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a plan file to open
    OpenFileRequested(PathBuf),
    /// User clicked "Sample Plan"
    OpenSamplePlanRequested,
    /// User picked a destination for "Save As"
    SaveAsRequested(PathBuf),
}

/// Directory offered by file dialogs: the per-user data directory if it
/// has an `rtimeline` folder, otherwise the working directory.
fn default_plan_dir() -> Option<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join("rtimeline"))
        .filter(|dir| dir.is_dir())
        .or_else(|| std::env::current_dir().ok())
}

fn plan_dialog() -> rfd::FileDialog {
    let mut dialog = rfd::FileDialog::new()
        .add_filter("Plan Files", &["json", "br"]);

    if let Some(dir) = default_plan_dir() {
        dialog = dialog.set_directory(dir);
    }
    dialog
}

/// Renders the application header with file, zoom and pan controls
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
/// * `canvas_width` - Width of the timeline canvas, used by "Fit"
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState, canvas_width: f32) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        if ui.button("📁 Open Plan").clicked() {
            if let Some(path) = plan_dialog().pick_file() {
                interaction = Some(HeaderInteraction::OpenFileRequested(path));
            }
        }

        if ui.button("🔮 Sample Plan").clicked() {
            interaction = Some(HeaderInteraction::OpenSamplePlanRequested);
        }

        let Some(document) = state.document.as_ref() else {
            return;
        };

        if ui.button("💾 Save As").clicked() {
            if let Some(path) = plan_dialog().set_file_name("plan.json").save_file() {
                interaction = Some(HeaderInteraction::SaveAsRequested(path));
            }
        }

        ui.separator();

        if ui.button("🔍+").clicked() {
            state.zoom.zoom(-1);
        }

        if ui.button("🔍-").clicked() {
            state.zoom.zoom(1);
        }

        if ui.button("⛶ Fit").clicked() {
            if let Some((start, end)) = document.current_plan().extent() {
                state.zoom.fit(end - start, f64::from(canvas_width));
                state.scroll_start = start;
            }
        }

        ui.label(format!(
            "Zoom: {} / {} px",
            format_duration(state.zoom.duration()),
            state.zoom.config().width
        ));

        ui.separator();

        if ui.button("◀").clicked() {
            state.scroll_start -= state.zoom.to_millis(PAN_STEP_PX);
        }
        ui.label(format_timestamp(state.scroll_start));
        if ui.button("▶").clicked() {
            state.scroll_start += state.zoom.to_millis(PAN_STEP_PX);
        }

        ui.separator();

        let name = document
            .path
            .as_ref()
            .map_or_else(|| "Unsaved sample plan".to_string(), |path| path.display().to_string());
        let dirty_marker = if document.is_dirty() { " *" } else { "" };
        ui.label(format!("{}{}", name, dirty_marker));
    });

    if let Some(err) = &state.error_message {
        ui.colored_label(Color32::RED, err);
    }

    interaction
}
