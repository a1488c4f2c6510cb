pub mod traits;
pub mod constants;
pub mod session;
pub mod snapping;
pub mod handles;
pub mod plan;
pub mod store;
pub mod drag_handler;
pub mod snap_handler;
pub mod zoom;
pub mod sample_plan;

// Export collaborator traits
pub use traits::{
    DragHandler, SnapHandler, ZoomController,
    IntervalId, Timestamp, Pixels
};

// Export handles
pub use handles::{
    TimelineHandle, HandleKind, HandleStyle,
    MoveHandle, StartHandle, EndHandle, create_handle
};

// Export snapping
pub use session::{DragSession, InitialBounds};
pub use snapping::{Edge, EdgeSnap, choose_edge, snap_edges};

// Export reference collaborators
pub use drag_handler::{TimelineDragHandler, SharedDragHandler};
pub use snap_handler::TimelineSnapHandler;
pub use zoom::{TimelineZoomController, ZoomConfig};

// Export plan files and stores
pub use plan::{Plan, Interval, read_plan, write_plan};
pub use store::{IntervalStore, JsonFileStore, MemoryStore};
pub use sample_plan::SamplePlanGenerator;
