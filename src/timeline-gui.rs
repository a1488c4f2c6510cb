//! Timeline Plan Editor GUI Application
//!
//! Interactive editor for timeline plans built on egui. Every activity is
//! drawn as a bar with three handles:
//! - Start/end handles resize the activity, snapping the dragged edge
//! - The move handle shifts the whole activity, snapping whichever edge
//!   lands closest to another activity's edge or a marker
//!
//! Edits are persisted back to the plan file when a drag gesture ends.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use std::path::PathBuf;

mod app;
mod ui;
mod utils;

use app::{AppState, ApplicationCoordinator, SettingsCoordinator};
use rtimeline::{TimelineZoomController, ZoomConfig};
use ui::header::HeaderInteraction;

const ZOOM_CONFIG_KEY: &str = "zoom_config";
const ZOOM_INDEX_KEY: &str = "zoom_index";

/// Main application entry point that initializes and launches the plan editor GUI.
fn main() -> eframe::Result {
    env_logger::init();

    // Parse command-line arguments to check for initial file to load
    let initial_file = std::env::args().nth(1).map(PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 600.0])
            .with_title("Timeline Plan Editor"),
        ..Default::default()
    };

    eframe::run_native(
        "Timeline Plan Editor",
        options,
        Box::new(move |cc| Ok(Box::new(TimelineApp::new(cc, initial_file)))),
    )
}

/// The main plan editor application.
struct TimelineApp {
    /// Centralized application state
    state: AppState,
    /// Optional file to load on first frame
    pending_file_load: Option<PathBuf>,
}

impl TimelineApp {
    /// Creates the editor with zoom settings restored from persistent storage.
    fn new(cc: &eframe::CreationContext, initial_file: Option<PathBuf>) -> Self {
        let config: ZoomConfig = SettingsCoordinator::load_setting_or(cc.storage, ZOOM_CONFIG_KEY, ZoomConfig::default());

        let mut zoom = TimelineZoomController::new(config).unwrap_or_else(|err| {
            log::warn!("Stored zoom configuration rejected ({:#}), using defaults", err);
            TimelineZoomController::default()
        });
        if let Some(index) = SettingsCoordinator::try_load_setting::<usize>(cc.storage, ZOOM_INDEX_KEY) {
            zoom.set_index(index);
        }

        Self {
            state: AppState::new(zoom),
            pending_file_load: initial_file,
        }
    }

    /// Handles header interactions by delegating to ApplicationCoordinator.
    fn handle_header_interaction(&mut self, interaction: HeaderInteraction) {
        match interaction {
            HeaderInteraction::OpenFileRequested(path) => {
                ApplicationCoordinator::open_file(&mut self.state, path);
            }
            HeaderInteraction::OpenSamplePlanRequested => {
                ApplicationCoordinator::open_sample_plan(&mut self.state);
            }
            HeaderInteraction::SaveAsRequested(path) => {
                ApplicationCoordinator::save_as(&mut self.state, path);
            }
        }
    }
}

impl eframe::App for TimelineApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        SettingsCoordinator::save_setting(storage, ZOOM_CONFIG_KEY, self.state.zoom.config());
        SettingsCoordinator::save_setting(storage, ZOOM_INDEX_KEY, &self.state.zoom.index());
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Load initial file if specified via command line (only on first frame)
        if let Some(path) = self.pending_file_load.take() {
            ApplicationCoordinator::open_file(&mut self.state, path);
        }

        let mut header_interaction = None;
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            let canvas_width = ctx.content_rect().width();
            header_interaction = ui::header::render_header(ui, &mut self.state, canvas_width);
        });

        if let Some(interaction) = header_interaction {
            self.handle_header_interaction(interaction);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui::timeline_panel::render_timeline_panel(ui, &mut self.state);
        });
    }
}
