//! Window struct

use crate::math::{Rect, Size, Vec2, FRAME_STYLE};
use super::{Hsl, WindowId};

/// A window on the simulated desktop
#[derive(Clone, Debug, PartialEq)]
pub struct Window {
    /// Unique identifier
    pub id: WindowId,
    /// Top-left corner, container-relative
    pub position: Vec2,
    /// Current size
    pub size: Size,
    /// Fill color
    pub color: Hsl,
    /// Whether the window occupies a half-container tile
    pub snapped: bool,
    /// Display label (only for variants with naming)
    pub name: Option<String>,
}

impl Window {
    /// Get the window's bounding rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    /// Get the title bar rectangle
    pub fn title_bar_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.size.width,
            FRAME_STYLE.title_bar_height.min(self.size.height),
        )
    }

    /// Get the close button rectangle
    pub fn close_button_rect(&self) -> Rect {
        let x = self.position.x + self.size.width
            - FRAME_STYLE.close_button_margin
            - FRAME_STYLE.close_button_size;
        let y = self.position.y
            + (FRAME_STYLE.title_bar_height - FRAME_STYLE.close_button_size) / 2.0;
        Rect::new(x, y, FRAME_STYLE.close_button_size, FRAME_STYLE.close_button_size)
    }
}
