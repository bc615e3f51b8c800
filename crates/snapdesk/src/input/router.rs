//! Input router state machine

use crate::math::Vec2;
use crate::window::WindowId;
use super::DragState;

/// Input router managing drag state
///
/// Holds at most one drag, so at most one window is moving at a time.
pub struct InputRouter {
    /// Current drag state
    drag: Option<DragState>,
    /// Window whose close control is pressed and awaiting release
    pending_close: Option<WindowId>,
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl InputRouter {
    /// Create a new input router
    pub fn new() -> Self {
        Self {
            drag: None,
            pending_close: None,
        }
    }

    /// Get current drag state
    #[inline]
    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Check if currently dragging
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Window currently being dragged
    #[inline]
    pub fn dragging_window(&self) -> Option<WindowId> {
        self.drag.map(|d| d.window_id)
    }

    /// Start window move operation, replacing any previous drag
    pub fn start_window_move(&mut self, window_id: WindowId, pointer: Vec2, window_position: Vec2) {
        self.drag = Some(DragState::grab(window_id, pointer, window_position));
    }

    /// End current drag operation, returning it
    pub fn end_drag(&mut self) -> Option<DragState> {
        self.drag.take()
    }

    /// Remember a press on a window's close control
    pub fn press_close(&mut self, window_id: WindowId) {
        self.pending_close = Some(window_id);
    }

    /// Take the pressed close control, if any
    pub fn take_pending_close(&mut self) -> Option<WindowId> {
        self.pending_close.take()
    }

    /// Drop the drag if it targets `window_id`; returns whether it did
    pub fn cancel_for(&mut self, window_id: WindowId) -> bool {
        if self.dragging_window() == Some(window_id) {
            self.drag = None;
            true
        } else {
            false
        }
    }
}
