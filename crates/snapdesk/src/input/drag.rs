//! Drag state for window moves

use crate::math::Vec2;
use crate::window::WindowId;

/// An in-progress window move
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    /// Window being moved
    pub window_id: WindowId,
    /// Offset from window origin to cursor, fixed for the whole drag
    pub offset: Vec2,
}

impl DragState {
    /// Start a drag from the pointer position and the window's current origin
    pub fn grab(window_id: WindowId, pointer: Vec2, window_position: Vec2) -> Self {
        Self {
            window_id,
            offset: pointer - window_position,
        }
    }

    /// Window origin that keeps the grab offset under `pointer`
    #[inline]
    pub fn target_position(&self, pointer: Vec2) -> Vec2 {
        pointer - self.offset
    }
}
