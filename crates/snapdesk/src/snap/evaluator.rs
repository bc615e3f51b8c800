//! Snap detection and release resolution

use crate::math::{Rect, Size, Vec2};
use super::SnapZone;

/// First zone, in priority order, whose edge is strictly within `threshold`
pub fn detect_zone(rect: Rect, bounds: Size, threshold: f32) -> Option<SnapZone> {
    SnapZone::PRIORITY
        .into_iter()
        .find(|zone| zone.edge_distance(rect, bounds) < threshold)
}

/// Live indicator for a window at `position`
///
/// Measured with `reference_size` (the default window size), not the size of
/// the window being dragged.
pub fn indicator_zone(
    position: Vec2,
    reference_size: Size,
    bounds: Size,
    threshold: f32,
) -> Option<SnapZone> {
    detect_zone(Rect::from_pos_size(position, reference_size), bounds, threshold)
}

/// Geometry a window takes when its drag is released
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Release {
    /// Occupy a tile
    Snap {
        zone: SnapZone,
        tile: Rect,
    },
    /// Stay put, size restored to the default
    Float {
        position: Vec2,
        size: Size,
    },
}

impl Release {
    /// Zone snapped into, if any
    pub fn zone(&self) -> Option<SnapZone> {
        match self {
            Release::Snap { zone, .. } => Some(*zone),
            Release::Float { .. } => None,
        }
    }
}

/// Decide the final geometry of `window` released inside `bounds`
pub fn resolve_release(window: Rect, bounds: Size, threshold: f32, default_size: Size) -> Release {
    match detect_zone(window, bounds, threshold) {
        Some(zone) => Release::Snap {
            zone,
            tile: zone.tile(bounds),
        },
        None => Release::Float {
            position: window.position(),
            size: default_size,
        },
    }
}
