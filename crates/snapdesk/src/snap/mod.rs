//! Edge snapping
//!
//! A window is snapped by comparing its edges with the container edges. The
//! same test drives the live indicator (against the default window size) and
//! the commit on release (against the window's real size).

mod zone;
mod evaluator;

pub use zone::SnapZone;
pub use evaluator::{detect_zone, indicator_zone, resolve_release, Release};

/// Edge proximity in pixels that triggers a snap
pub const DEFAULT_SNAP_THRESHOLD: f32 = 30.0;
