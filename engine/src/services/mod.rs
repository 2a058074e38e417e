//! Layout services: the stateful shell and per-concern calculators wrapped
//! around the pure algorithms.

pub mod drag;
pub mod layout;
pub mod state;
pub mod viewport;

pub use drag::{DragMode, DragSession};
pub use layout::{BlockGeometry, GridMetrics};
pub use state::TimelineState;
pub use viewport::{anchor_scroll, compute_range, ViewportRange};
