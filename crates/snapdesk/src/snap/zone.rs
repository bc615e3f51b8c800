//! Half-container tiles

use serde::{Deserialize, Serialize};
use crate::math::{Rect, Size};

/// One of the four half-container tiles
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapZone {
    Left,
    Right,
    Top,
    Bottom,
}

impl SnapZone {
    /// Zones in evaluation priority order
    pub const PRIORITY: [SnapZone; 4] = [
        SnapZone::Left,
        SnapZone::Right,
        SnapZone::Top,
        SnapZone::Bottom,
    ];

    /// Rectangle this zone occupies in a container of the given size
    pub fn tile(self, bounds: Size) -> Rect {
        let half_w = bounds.half_width();
        let half_h = bounds.half_height();
        match self {
            SnapZone::Left => Rect::new(0.0, 0.0, half_w, bounds.height),
            SnapZone::Right => Rect::new(half_w, 0.0, half_w, bounds.height),
            SnapZone::Top => Rect::new(0.0, 0.0, bounds.width, half_h),
            SnapZone::Bottom => Rect::new(0.0, half_h, bounds.width, half_h),
        }
    }

    /// Distance between the matching window edge and container edge
    pub(crate) fn edge_distance(self, rect: Rect, bounds: Size) -> f32 {
        match self {
            SnapZone::Left => rect.x.abs(),
            SnapZone::Right => (rect.right() - bounds.width).abs(),
            SnapZone::Top => rect.y.abs(),
            SnapZone::Bottom => (rect.bottom() - bounds.height).abs(),
        }
    }
}
