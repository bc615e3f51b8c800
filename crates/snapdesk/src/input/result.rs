//! Input result type

use serde::Serialize;
use crate::snap::SnapZone;
use crate::window::WindowId;

/// Result of input handling
///
/// `DragStarted` and `DragEnded` bracket the period during which the host
/// must listen for pointer move/up at document level.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InputResult {
    /// Input was handled internally
    Handled,
    /// Input was not handled (pass through)
    Unhandled,
    /// A window drag began
    DragStarted {
        /// Window being dragged
        window_id: WindowId,
    },
    /// The drag ended
    DragEnded {
        /// Window that was dragged
        window_id: WindowId,
        /// Tile the window snapped into, if any
        zone: Option<SnapZone>,
    },
    /// A window was closed through its close control
    Closed {
        /// Closed window
        window_id: WindowId,
    },
}

impl InputResult {
    /// Check if this result ends a drag
    #[inline]
    pub fn ends_drag(&self) -> bool {
        matches!(self, InputResult::DragEnded { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_string(&InputResult::DragEnded {
            window_id: 3,
            zone: Some(SnapZone::Left),
        })
        .unwrap();
        assert_eq!(json, r#"{"type":"dragEnded","window_id":3,"zone":"left"}"#);

        let json = serde_json::to_string(&InputResult::Unhandled).unwrap();
        assert_eq!(json, r#"{"type":"unhandled"}"#);
    }
}
