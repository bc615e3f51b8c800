//! Input handling for pointer events, drag and snap

use crate::input::{DragState, InputResult};
use crate::math::Vec2;
use crate::snap::{indicator_zone, resolve_release, Release, SnapZone};
use crate::window::{WindowId, WindowRegion};
use super::DesktopEngine;

impl DesktopEngine {
    /// Start move drag on a window's title bar
    ///
    /// Ignored for unknown windows and for variants without dragging. A drag
    /// already in progress is released first, exactly as on pointer up.
    pub fn start_move_drag(&mut self, id: WindowId, x: f32, y: f32) -> InputResult {
        if !self.config.variant.can_drag() || self.windows.get(id).is_none() {
            return InputResult::Unhandled;
        }

        self.input.take_pending_close();
        if let Some(previous) = self.input.end_drag() {
            tracing::debug!(window_id = previous.window_id, "drag superseded by a new grab");
            self.release_drag(previous);
        }

        // Re-read after the release, which may have tiled or resized it
        let window_position = match self.windows.get(id) {
            Some(window) => window.position,
            None => return InputResult::Unhandled,
        };

        self.input.start_window_move(id, Vec2::new(x, y), window_position);
        tracing::debug!(window_id = id, x, y, "drag started");
        InputResult::DragStarted { window_id: id }
    }

    /// Handle pointer down
    ///
    /// A press that arrives while a drag is active stands in for the missed
    /// pointer up and only ends that drag.
    pub fn handle_pointer_down(&mut self, x: f32, y: f32) -> InputResult {
        self.input.take_pending_close();
        if let Some(drag) = self.input.end_drag() {
            tracing::debug!(window_id = drag.window_id, "press during drag, releasing");
            return self.release_drag(drag);
        }

        let pos = Vec2::new(x, y);
        let (window_id, region) = match self.windows.region_at(pos) {
            Some(hit) => hit,
            None => return InputResult::Unhandled,
        };

        match region {
            WindowRegion::CloseButton => {
                self.input.press_close(window_id);
                InputResult::Handled
            }
            WindowRegion::TitleBar => self.start_move_drag(window_id, x, y),
            WindowRegion::Content => InputResult::Unhandled,
        }
    }

    /// CSS cursor for the pointer position
    pub fn cursor_at(&self, x: f32, y: f32) -> &'static str {
        match self.windows.region_at(Vec2::new(x, y)) {
            Some((_, WindowRegion::TitleBar)) if !self.config.variant.can_drag() => "default",
            Some((_, region)) => region.cursor(),
            None => "default",
        }
    }

    /// Handle pointer move
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        let drag = match self.input.drag_state() {
            Some(state) => *state,
            None => return InputResult::Unhandled,
        };

        let new_pos = drag.target_position(Vec2::new(x, y));
        self.windows.move_window(drag.window_id, new_pos);

        if self.config.variant.shows_indicator() {
            self.update_indicator(new_pos);
        }

        InputResult::Handled
    }

    /// Recompute the snap indicator for a window at `position`
    ///
    /// Keeps the previous indicator when the container is not measured.
    fn update_indicator(&mut self, position: Vec2) {
        let bounds = match self.container_size() {
            Some(size) => size,
            None => return,
        };

        let zone = indicator_zone(
            position,
            self.config.default_size,
            bounds,
            self.config.snap_threshold,
        );
        if zone != self.indicator {
            tracing::trace!(?zone, "snap indicator changed");
        }
        self.indicator = zone;
    }

    /// Handle pointer up
    ///
    /// Ends an active drag, or completes a close click when the pointer is
    /// released over the same close control it pressed.
    pub fn handle_pointer_up(&mut self, x: f32, y: f32) -> InputResult {
        if let Some(drag) = self.input.end_drag() {
            return self.release_drag(drag);
        }

        let window_id = match self.input.take_pending_close() {
            Some(id) => id,
            None => return InputResult::Unhandled,
        };

        if self.windows.region_at(Vec2::new(x, y)) == Some((window_id, WindowRegion::CloseButton)) {
            self.close_window(window_id);
            InputResult::Closed { window_id }
        } else {
            tracing::debug!(window_id, "close cancelled, released off the control");
            InputResult::Handled
        }
    }

    /// Finish a drag the router has already given up
    fn release_drag(&mut self, drag: DragState) -> InputResult {
        self.indicator = None;

        let zone = if self.config.variant.snaps() {
            self.commit_snap(drag.window_id)
        } else {
            None
        };

        tracing::debug!(window_id = drag.window_id, ?zone, "drag ended");
        InputResult::DragEnded {
            window_id: drag.window_id,
            zone,
        }
    }

    /// Apply the release geometry to a window that just stopped moving
    fn commit_snap(&mut self, id: WindowId) -> Option<SnapZone> {
        let rect = self.windows.get(id)?.rect();
        let bounds = match self.container_size() {
            Some(size) => size,
            None => {
                tracing::warn!(window_id = id, "container bounds unavailable, snap skipped");
                return None;
            }
        };

        let release = resolve_release(
            rect,
            bounds,
            self.config.snap_threshold,
            self.config.default_size,
        );
        match release {
            Release::Snap { tile, .. } => self.windows.snap_to(id, tile),
            Release::Float { size, .. } => self.windows.unsnap(id, size),
        }
        release.zone()
    }
}
