//! Window registry: ordered windows and the id counter

use crate::math::{Rect, Size, Vec2};
use super::{Window, WindowConfig, WindowId, WindowRegion};

/// Window registry in creation order
///
/// Later windows are drawn over earlier ones, so hit testing walks the list
/// back to front.
pub struct WindowManager {
    /// All windows, in creation order
    windows: Vec<Window>,
    /// Next window ID
    next_id: WindowId,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowManager {
    /// Create a new window manager
    pub fn new() -> Self {
        Self {
            windows: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a new window
    pub fn create(&mut self, config: WindowConfig) -> WindowId {
        let id = self.next_id;
        self.next_id += 1;

        let name = config.named.then(|| format!("Window {}", id));

        self.windows.push(Window {
            id,
            position: config.position,
            size: config.size,
            color: config.color,
            snapped: false,
            name,
        });

        id
    }

    /// Close a window; returns whether it existed
    pub fn close(&mut self, id: WindowId) -> bool {
        let before = self.windows.len();
        self.windows.retain(|w| w.id != id);
        self.windows.len() != before
    }

    /// Get a window by ID
    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// Get a mutable window by ID
    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    /// Move a window and mark it unsnapped
    pub fn move_window(&mut self, id: WindowId, position: Vec2) {
        if let Some(window) = self.get_mut(id) {
            window.position = position;
            window.snapped = false;
        }
    }

    /// Place a window into a tile
    pub fn snap_to(&mut self, id: WindowId, tile: Rect) {
        if let Some(window) = self.get_mut(id) {
            window.position = tile.position();
            window.size = tile.size();
            window.snapped = true;
        }
    }

    /// Keep the position but restore the untiled size
    pub fn unsnap(&mut self, id: WindowId, size: Size) {
        if let Some(window) = self.get_mut(id) {
            window.size = size;
            window.snapped = false;
        }
    }

    /// All windows in creation (render) order
    pub fn all_windows(&self) -> impl Iterator<Item = &Window> {
        self.windows.iter()
    }

    /// Find which region of which window is at a position
    pub fn region_at(&self, pos: Vec2) -> Option<(WindowId, WindowRegion)> {
        let window = self.windows.iter().rev().find(|w| w.rect().contains(pos))?;
        Some((window.id, hit_test_window(window, pos)))
    }

    /// Get the number of windows
    pub fn count(&self) -> usize {
        self.windows.len()
    }
}

/// Hit test a specific window at a position already known to be inside it
fn hit_test_window(window: &Window, pos: Vec2) -> WindowRegion {
    if window.close_button_rect().contains(pos) {
        return WindowRegion::CloseButton;
    }
    if window.title_bar_rect().contains(pos) {
        return WindowRegion::TitleBar;
    }
    WindowRegion::Content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::Hsl;

    fn config_at(x: f32, y: f32) -> WindowConfig {
        WindowConfig {
            position: Vec2::new(x, y),
            size: Size::new(300.0, 200.0),
            color: Hsl::new(120, 70, 80),
            named: true,
        }
    }

    #[test]
    fn test_window_creation() {
        let mut wm = WindowManager::new();
        let id = wm.create(config_at(100.0, 100.0));

        let window = wm.get(id).unwrap();
        assert_eq!(id, 1);
        assert_eq!(window.name.as_deref(), Some("Window 1"));
        assert!(!window.snapped);
        assert_eq!(wm.count(), 1);
    }

    #[test]
    fn test_unnamed_window() {
        let mut wm = WindowManager::new();
        let id = wm.create(WindowConfig {
            named: false,
            ..config_at(0.0, 0.0)
        });
        assert!(wm.get(id).unwrap().name.is_none());
    }

    #[test]
    fn test_ids_not_reused_after_close() {
        let mut wm = WindowManager::new();
        let id1 = wm.create(config_at(0.0, 0.0));
        let id2 = wm.create(config_at(0.0, 0.0));
        wm.close(id2);
        let id3 = wm.create(config_at(0.0, 0.0));

        assert_eq!((id1, id2, id3), (1, 2, 3));
    }

    #[test]
    fn test_window_close() {
        let mut wm = WindowManager::new();
        let id = wm.create(config_at(0.0, 0.0));

        assert!(wm.close(id));
        assert_eq!(wm.count(), 0);
        assert!(wm.get(id).is_none());
        assert!(!wm.close(id));
    }

    #[test]
    fn test_close_preserves_order() {
        let mut wm = WindowManager::new();
        let a = wm.create(config_at(0.0, 0.0));
        let b = wm.create(config_at(0.0, 0.0));
        let c = wm.create(config_at(0.0, 0.0));
        wm.close(b);

        let ids: Vec<WindowId> = wm.all_windows().map(|w| w.id).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn test_move_clears_snapped() {
        let mut wm = WindowManager::new();
        let id = wm.create(config_at(0.0, 0.0));
        wm.snap_to(id, Rect::new(0.0, 0.0, 500.0, 800.0));
        assert!(wm.get(id).unwrap().snapped);

        wm.move_window(id, Vec2::new(40.0, 50.0));
        let window = wm.get(id).unwrap();
        assert!(!window.snapped);
        assert_eq!(window.position, Vec2::new(40.0, 50.0));
        assert_eq!(window.size, Size::new(500.0, 800.0));
    }

    #[test]
    fn test_unsnap_restores_size_keeps_position() {
        let mut wm = WindowManager::new();
        let id = wm.create(config_at(0.0, 0.0));
        wm.snap_to(id, Rect::new(500.0, 0.0, 500.0, 800.0));
        wm.unsnap(id, Size::new(300.0, 200.0));

        let window = wm.get(id).unwrap();
        assert_eq!(window.rect(), Rect::new(500.0, 0.0, 300.0, 200.0));
        assert!(!window.snapped);
    }

    #[test]
    fn test_hit_testing() {
        let mut wm = WindowManager::new();
        let id = wm.create(config_at(100.0, 100.0));

        // Title bar, left of the close control
        let (hit_id, region) = wm.region_at(Vec2::new(150.0, 110.0)).unwrap();
        assert_eq!(hit_id, id);
        assert_eq!(region, WindowRegion::TitleBar);

        // Close control near the right end of the title bar
        let (_, region) = wm.region_at(Vec2::new(384.0, 116.0)).unwrap();
        assert_eq!(region, WindowRegion::CloseButton);

        // Content
        let (_, region) = wm.region_at(Vec2::new(200.0, 250.0)).unwrap();
        assert_eq!(region, WindowRegion::Content);

        // Outside
        assert!(wm.region_at(Vec2::new(50.0, 50.0)).is_none());
    }

    #[test]
    fn test_hit_testing_prefers_newest() {
        let mut wm = WindowManager::new();
        let _below = wm.create(config_at(100.0, 100.0));
        let above = wm.create(config_at(150.0, 110.0));

        let (hit_id, _) = wm.region_at(Vec2::new(200.0, 120.0)).unwrap();
        assert_eq!(hit_id, above);
    }
}
