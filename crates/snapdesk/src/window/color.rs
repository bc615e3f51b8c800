//! Pastel window colors

use std::fmt;
use serde::{Serialize, Serializer};
use crate::config::ColorConfig;
use crate::error::DesktopResult;
use crate::random::RandomSource;

/// Color in HSL space, rendered as a CSS `hsl()` string
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Hsl {
    /// Hue in degrees, `[0, 360)`
    pub hue: u16,
    /// Saturation percentage
    pub saturation: u8,
    /// Lightness percentage
    pub lightness: u8,
}

impl Hsl {
    /// Create a color from its components
    #[inline]
    pub const fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Draw a uniformly random hue with the configured saturation and lightness
    pub fn random(rng: &mut dyn RandomSource, config: &ColorConfig) -> DesktopResult<Self> {
        let hue = rng.below(360)? as u16;
        Ok(Self::new(hue, config.saturation, config.lightness))
    }

    /// CSS representation
    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

impl Serialize for Hsl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
