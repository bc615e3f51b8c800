//! Frame style constants

/// Frame style constants for window chrome
pub struct FrameStyle {
    /// Height of the draggable title bar
    pub title_bar_height: f32,
    /// Side length of the square close control
    pub close_button_size: f32,
    /// Gap between the close control and the window's right edge
    pub close_button_margin: f32,
}

/// Default frame style matching the UI design
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    title_bar_height: 32.0,
    close_button_size: 16.0,
    close_button_margin: 8.0,
};
