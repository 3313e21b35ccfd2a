//! Region selection core.
//!
//! [`selection::Model`] is the pure state machine (actions in, effects out).
//! [`SelectionTracker`] binds it to a [`rc_platform::PointerSurface`] with a
//! scoped subscription and pushes every effect to its observers.

pub mod classifier;
pub mod crosshair;
pub mod selection;
pub mod tracker;

pub use classifier::{CornerClassifier, classify_element};
pub use crosshair::CrosshairTracker;
pub use selection::{Effect, Mode, PointerHit, Snapshot, Thresholds};
pub use tracker::{ObserverId, SelectionTracker};
