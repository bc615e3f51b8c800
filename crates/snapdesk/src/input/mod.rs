//! Input routing module
//!
//! Provides the Idle/Dragging state machine for window moves.

mod router;
mod drag;
mod result;

pub use router::InputRouter;
pub use drag::DragState;
pub use result::InputResult;
