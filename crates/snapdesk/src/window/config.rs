//! Window configuration for creation

use crate::math::{Size, Vec2};
use super::Hsl;

/// Configuration for creating a window
#[derive(Clone, Debug, Default)]
pub struct WindowConfig {
    /// Initial top-left position
    pub position: Vec2,
    /// Initial size
    pub size: Size,
    /// Fill color, fixed for the window's lifetime
    pub color: Hsl,
    /// Give the window a `Window <id>` display name
    pub named: bool,
}
