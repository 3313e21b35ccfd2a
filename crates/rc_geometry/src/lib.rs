pub mod corner;
pub mod rect;

// Re-export the common types.
pub use corner::{CornerId, HANDLE_HIT_RADIUS, apply_corner_delta, corner_at_position};
pub use rect::{Point, Rectangle};
