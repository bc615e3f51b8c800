//! Engine configuration
//!
//! Every field has a default matching the stock desktop, so an empty JSON
//! object is a valid configuration.

use serde::{Deserialize, Serialize};
use crate::error::{DesktopError, DesktopResult};
use crate::math::Size;
use crate::snap::DEFAULT_SNAP_THRESHOLD;

/// Feature set the desktop runs with
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Windows can be added and closed but never moved
    Static,
    /// Windows can be dragged; no snapping, no indicator, no names
    Draggable,
    /// Dragging with edge snapping, live indicator and window names
    #[default]
    Tiling,
}

impl Variant {
    /// Whether title bar drags are accepted
    #[inline]
    pub fn can_drag(self) -> bool {
        !matches!(self, Variant::Static)
    }

    /// Whether releasing a drag near an edge tiles the window
    #[inline]
    pub fn snaps(self) -> bool {
        matches!(self, Variant::Tiling)
    }

    /// Whether the snap indicator is tracked during drags
    #[inline]
    pub fn shows_indicator(self) -> bool {
        matches!(self, Variant::Tiling)
    }

    /// Whether windows carry a display name
    #[inline]
    pub fn names_windows(self) -> bool {
        matches!(self, Variant::Tiling)
    }
}

/// Pastel color parameters for new windows
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// Saturation percentage
    pub saturation: u8,
    /// Lightness percentage
    pub lightness: u8,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            saturation: 70,
            lightness: 80,
        }
    }
}

/// Configuration for a [`crate::DesktopEngine`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopConfig {
    /// Which features are enabled
    pub variant: Variant,
    /// Edge proximity (pixels) that triggers a snap
    pub snap_threshold: f32,
    /// Size of every unsnapped window
    pub default_size: Size,
    /// New windows are placed at integer positions in `[0, width) x [0, height)`
    pub spawn_area: Size,
    /// Color of new windows
    pub color: ColorConfig,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
            default_size: Size::new(300.0, 200.0),
            spawn_area: Size::new(500.0, 300.0),
            color: ColorConfig::default(),
        }
    }
}

impl DesktopConfig {
    /// Default configuration with a different variant
    pub fn for_variant(variant: Variant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        let config: DesktopConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that all values are usable
    pub fn validate(&self) -> DesktopResult<()> {
        if !positive_finite(self.snap_threshold) {
            return Err(DesktopError::InvalidConfig {
                field: "snap_threshold",
                reason: "must be positive",
            });
        }
        if !positive_finite(self.default_size.width) || !positive_finite(self.default_size.height) {
            return Err(DesktopError::InvalidConfig {
                field: "default_size",
                reason: "width and height must be positive",
            });
        }
        if !(self.spawn_area.width.is_finite() && self.spawn_area.width >= 1.0)
            || !(self.spawn_area.height.is_finite() && self.spawn_area.height >= 1.0)
        {
            return Err(DesktopError::InvalidConfig {
                field: "spawn_area",
                reason: "width and height must be at least 1",
            });
        }
        if self.color.saturation > 100 || self.color.lightness > 100 {
            return Err(DesktopError::InvalidConfig {
                field: "color",
                reason: "percentages must be at most 100",
            });
        }
        Ok(())
    }
}

fn positive_finite(value: f32) -> bool {
    value.is_finite() && value > 0.0
}
