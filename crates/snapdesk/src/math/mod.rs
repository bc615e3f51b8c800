//! Geometry types for the desktop surface
//!
//! All coordinates are container-relative pixels with the origin at the
//! container's top-left corner.

mod rect;
mod size;
mod style;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use style::{FrameStyle, FRAME_STYLE};
pub use vec2::Vec2;
