//! Application-level modules for the timeline viewer.
//!
//! This module contains the application coordinator, the open document,
//! and settings persistence.

mod app_state;
mod application_coordinator;
mod settings_coordinator;

pub use app_state::{ActiveDrag, AppState, Document};
pub use application_coordinator::ApplicationCoordinator;
pub use settings_coordinator::SettingsCoordinator;
