//! WASM exports for the desktop engine
//!
//! This module provides wasm-bindgen exports for the DesktopEngine,
//! allowing a browser host to forward pointer events and draw frames.
//!
//! Pointer coordinates are client coordinates; they are made
//! container-relative using the last measured container origin, which
//! survives `clear_container_bounds` so a drag in progress does not jump.

use wasm_bindgen::prelude::*;

use crate::config::{DesktopConfig, Variant};
use crate::engine::DesktopEngine;
use crate::input::InputResult;
use crate::math::{Rect, Vec2};

/// Desktop controller for WASM - wraps DesktopEngine with JS-friendly API
#[wasm_bindgen]
pub struct DesktopController {
    engine: DesktopEngine,
    /// Client position of the container's top-left corner, last measured
    origin: Vec2,
}

#[wasm_bindgen]
impl DesktopController {
    /// Create a new tiling desktop controller
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::wrap(DesktopEngine::new())
    }

    /// Create a controller from a JSON configuration
    #[wasm_bindgen]
    pub fn from_config_json(json: &str) -> Result<DesktopController, JsError> {
        let config = DesktopConfig::from_json(json)?;
        Ok(Self::wrap(DesktopEngine::with_config(config)?))
    }

    /// Create a controller for a named variant ("static", "draggable", "tiling")
    #[wasm_bindgen]
    pub fn for_variant(variant: &str) -> Result<DesktopController, JsError> {
        let variant = match variant {
            "static" => Variant::Static,
            "draggable" => Variant::Draggable,
            "tiling" => Variant::Tiling,
            other => return Err(JsError::new(&format!("unknown variant: {}", other))),
        };
        Ok(Self::wrap(DesktopEngine::with_config(
            DesktopConfig::for_variant(variant),
        )?))
    }

    // =========================================================================
    // Container
    // =========================================================================

    /// Set the container bounding rectangle explicitly
    #[wasm_bindgen]
    pub fn set_container_bounds(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.origin = Vec2::new(x, y);
        self.engine.set_container_bounds(Rect::new(x, y, width, height));
    }

    /// Measure the container element with `getBoundingClientRect`
    #[wasm_bindgen]
    pub fn measure_container(&mut self, element: &web_sys::Element) {
        let rect = element.get_bounding_client_rect();
        self.set_container_bounds(
            rect.x() as f32,
            rect.y() as f32,
            rect.width() as f32,
            rect.height() as f32,
        );
    }

    /// Forget the container bounds (container unmounted)
    #[wasm_bindgen]
    pub fn clear_container_bounds(&mut self) {
        self.engine.clear_container_bounds();
    }

    // =========================================================================
    // Windows
    // =========================================================================

    /// Add a window, returning its ID
    #[wasm_bindgen]
    pub fn add_window(&mut self) -> Result<u64, JsError> {
        Ok(self.engine.add_window()?)
    }

    /// Close a window
    #[wasm_bindgen]
    pub fn close_window(&mut self, id: u64) {
        self.engine.close_window(id);
    }

    /// Number of open windows
    #[wasm_bindgen]
    pub fn window_count(&self) -> u32 {
        self.engine.windows.count() as u32
    }

    // =========================================================================
    // Input Handling
    // =========================================================================

    /// Handle pointer down event
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, client_x: f32, client_y: f32) -> String {
        let local = self.to_local(client_x, client_y);
        let result = self.engine.handle_pointer_down(local.x, local.y);
        result_json(&result)
    }

    /// Handle pointer move event (document-level listener)
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, client_x: f32, client_y: f32) -> String {
        let local = self.to_local(client_x, client_y);
        let result = self.engine.handle_pointer_move(local.x, local.y);
        result_json(&result)
    }

    /// Handle pointer up event (document-level listener)
    #[wasm_bindgen]
    pub fn pointer_up(&mut self, client_x: f32, client_y: f32) -> String {
        let local = self.to_local(client_x, client_y);
        let result = self.engine.handle_pointer_up(local.x, local.y);
        result_json(&result)
    }

    /// Start a window drag from the window's own title bar handler
    #[wasm_bindgen]
    pub fn start_window_drag(&mut self, window_id: u64, client_x: f32, client_y: f32) -> String {
        let local = self.to_local(client_x, client_y);
        let result = self.engine.start_move_drag(window_id, local.x, local.y);
        result_json(&result)
    }

    /// CSS cursor for a client position
    #[wasm_bindgen]
    pub fn cursor_at(&self, client_x: f32, client_y: f32) -> String {
        let local = self.to_local(client_x, client_y);
        self.engine.cursor_at(local.x, local.y).to_string()
    }

    /// Whether document-level move/up listeners should be attached
    #[wasm_bindgen]
    pub fn is_dragging(&self) -> bool {
        self.engine.input.is_dragging()
    }

    // =========================================================================
    // Frame
    // =========================================================================

    /// Complete frame data as JSON
    #[wasm_bindgen]
    pub fn get_frame_json(&self) -> Result<String, JsError> {
        Ok(self.engine.frame().to_json()?)
    }

}

impl DesktopController {
    fn wrap(engine: DesktopEngine) -> Self {
        Self {
            engine,
            origin: Vec2::ZERO,
        }
    }

    /// Convert client coordinates to container coordinates
    fn to_local(&self, client_x: f32, client_y: f32) -> Vec2 {
        Vec2::new(client_x, client_y) - self.origin
    }
}

/// Serialize an input result for JS
fn result_json(result: &InputResult) -> String {
    serde_json::to_string(result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
}

impl Default for DesktopController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_local_uses_container_origin() {
        let mut controller = DesktopController::new();
        assert_eq!(controller.to_local(40.0, 30.0), Vec2::new(40.0, 30.0));

        controller.set_container_bounds(100.0, 50.0, 1000.0, 800.0);
        assert_eq!(controller.to_local(140.0, 80.0), Vec2::new(40.0, 30.0));
    }

    #[test]
    fn test_cleared_bounds_keep_last_origin() {
        let mut controller = DesktopController::new();
        controller.set_container_bounds(100.0, 50.0, 1000.0, 800.0);
        let id = controller.engine.add_window().unwrap();
        let start = controller.engine.windows.get(id).unwrap().position;

        controller.start_window_drag(id, start.x + 110.0, start.y + 60.0);
        controller.clear_container_bounds();
        controller.pointer_move(start.x + 130.0, start.y + 80.0);

        let moved = controller.engine.windows.get(id).unwrap().position;
        assert_eq!(moved, start + Vec2::new(20.0, 20.0));
    }
}
