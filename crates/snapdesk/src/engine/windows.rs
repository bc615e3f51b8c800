//! Window lifecycle

use crate::error::{DesktopError, DesktopResult};
use crate::math::Vec2;
use crate::window::{Hsl, Window, WindowConfig, WindowId};
use super::DesktopEngine;

impl DesktopEngine {
    /// Add a window at a random position with a random pastel color
    pub fn add_window(&mut self) -> DesktopResult<WindowId> {
        let area = self.config.spawn_area;
        let x = self.rng.below(area.width as u32)?;
        let y = self.rng.below(area.height as u32)?;
        let color = Hsl::random(self.rng.as_mut(), &self.config.color)?;

        let id = self.windows.create(WindowConfig {
            position: Vec2::new(x as f32, y as f32),
            size: self.config.default_size,
            color,
            named: self.config.variant.names_windows(),
        });

        tracing::debug!(window_id = id, x, y, %color, "window added");
        Ok(id)
    }

    /// Close a window
    ///
    /// Unknown ids are ignored. Closing the window being dragged ends the drag.
    pub fn close_window(&mut self, id: WindowId) {
        if !self.windows.close(id) {
            return;
        }

        if self.input.cancel_for(id) {
            self.indicator = None;
            tracing::debug!(window_id = id, "dragged window closed, drag cancelled");
        }
        tracing::debug!(window_id = id, "window closed");
    }

    /// Look up a window, failing if it does not exist
    pub fn window(&self, id: WindowId) -> DesktopResult<&Window> {
        self.windows.get(id).ok_or(DesktopError::WindowNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{DesktopConfig, Variant};
    use crate::engine::DesktopEngine;
    use crate::error::DesktopError;
    use crate::math::{Size, Vec2};
    use crate::random::ScriptedRandom;
    use crate::window::Hsl;

    fn engine_with(variant: Variant, values: Vec<u32>) -> DesktopEngine {
        DesktopEngine::with_random(
            DesktopConfig::for_variant(variant),
            Box::new(ScriptedRandom::new(values)),
        )
        .unwrap()
    }

    #[test]
    fn test_add_window_uses_random_source() {
        let mut engine = engine_with(Variant::Tiling, vec![123, 1045, 400]);
        let id = engine.add_window().unwrap();

        let window = engine.window(id).unwrap();
        assert_eq!(window.position, Vec2::new(123.0, 145.0));
        assert_eq!(window.size, Size::new(300.0, 200.0));
        assert_eq!(window.color, Hsl::new(40, 70, 80));
        assert!(!window.snapped);
        assert_eq!(window.name.as_deref(), Some("Window 1"));
    }

    #[test]
    fn test_add_window_unnamed_in_simple_variants() {
        let mut engine = engine_with(Variant::Draggable, vec![1, 2, 3]);
        let id = engine.add_window().unwrap();
        assert!(engine.window(id).unwrap().name.is_none());
    }

    #[test]
    fn test_add_window_entropy_failure() {
        let mut engine = engine_with(Variant::Tiling, Vec::new());
        assert!(matches!(engine.add_window(), Err(DesktopError::Entropy(_))));
        assert_eq!(engine.windows.count(), 0);
    }

    #[test]
    fn test_close_window_idempotent() {
        let mut engine = engine_with(Variant::Tiling, vec![1, 2, 3]);
        let a = engine.add_window().unwrap();
        let b = engine.add_window().unwrap();

        engine.close_window(a);
        engine.close_window(a);

        assert_eq!(engine.windows.count(), 1);
        assert!(engine.window(b).is_ok());
        assert_eq!(engine.window(a).unwrap_err(), DesktopError::WindowNotFound(a));
    }

    #[test]
    fn test_close_unknown_is_noop() {
        let mut engine = engine_with(Variant::Tiling, vec![1, 2, 3]);
        engine.add_window().unwrap();
        engine.close_window(99);
        assert_eq!(engine.windows.count(), 1);
    }
}
