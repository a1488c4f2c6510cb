//! Utility modules for the timeline viewer.

pub mod formatting;

pub use formatting::{format_duration, format_timestamp};
