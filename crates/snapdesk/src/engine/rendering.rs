//! Frame description for the host renderer

use serde::Serialize;
use crate::error::DesktopResult;
use crate::math::Rect;
use crate::snap::SnapZone;
use crate::window::{Hsl, Window, WindowId};
use super::DesktopEngine;

/// One window as the host should draw it
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameWindow {
    pub id: WindowId,
    pub name: Option<String>,
    pub color: Hsl,
    pub rect: Rect,
    pub snapped: bool,
    /// Whether this window is under the pointer drag
    pub dragging: bool,
}

/// Snap indicator overlay
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameIndicator {
    pub zone: SnapZone,
    /// Tile the window would occupy if released now
    pub rect: Rect,
}

/// Everything the host needs for one render pass
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    /// Windows back to front
    pub windows: Vec<FrameWindow>,
    pub indicator: Option<FrameIndicator>,
    pub dragging: Option<WindowId>,
}

impl Frame {
    /// Serialize to JSON for the host
    pub fn to_json(&self) -> DesktopResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl DesktopEngine {
    /// Build the frame for the current state
    pub fn frame(&self) -> Frame {
        let dragging = self.input.dragging_window();

        let windows = self
            .windows
            .all_windows()
            .map(|w| frame_window(w, dragging))
            .collect();

        Frame {
            windows,
            indicator: self.frame_indicator(),
            dragging,
        }
    }

    /// Indicator overlay, if one is showing and the container is measured
    fn frame_indicator(&self) -> Option<FrameIndicator> {
        let zone = self.indicator?;
        let bounds = self.container_size()?;
        Some(FrameIndicator {
            zone,
            rect: zone.tile(bounds),
        })
    }
}

fn frame_window(w: &Window, dragging: Option<WindowId>) -> FrameWindow {
    FrameWindow {
        id: w.id,
        name: w.name.clone(),
        color: w.color,
        rect: w.rect(),
        snapped: w.snapped,
        dragging: dragging == Some(w.id),
    }
}
