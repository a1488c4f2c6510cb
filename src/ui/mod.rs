//! UI panel rendering subsystem
//!
//! - Header panel (file controls, zoom, scroll)
//! - Timeline panel (interval rows with start, move and end handles)

pub mod header;
pub mod timeline_panel;
