//! Shared layout constants for timeline handles.
//!
//! Both values are in pixels and are converted to time through the
//! current zoom level wherever a duration is needed.

use crate::traits::Pixels;

/// Visual width of a start/end handle, also the inset of the move handle.
pub const HANDLE_WIDTH: Pixels = 32.0;

/// Distance within which a dragged edge is pulled onto a snap candidate.
pub const SNAP_WIDTH: Pixels = 16.0;

/// Height of one interval row in the viewer.
pub const ROW_HEIGHT: f32 = 24.0;
