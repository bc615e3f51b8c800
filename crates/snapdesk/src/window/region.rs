//! Window region for hit testing

/// Region of a window for hit testing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowRegion {
    /// Title bar area (for dragging)
    TitleBar,
    /// Close control inside the title bar
    CloseButton,
    /// Everything below the title bar
    Content,
}

impl WindowRegion {
    /// Get CSS cursor style for this region
    pub fn cursor(&self) -> &'static str {
        match self {
            WindowRegion::TitleBar => "move",
            WindowRegion::CloseButton => "pointer",
            WindowRegion::Content => "default",
        }
    }
}
