//! Desktop engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `windows`: Window lifecycle (add, close)
//! - `input`: Pointer event handling, drag and snap
//! - `rendering`: Frame description for the host

mod windows;
mod input;
mod rendering;

use crate::config::DesktopConfig;
use crate::error::DesktopResult;
use crate::input::InputRouter;
use crate::math::{Rect, Size};
use crate::random::{OsRandom, RandomSource};
use crate::snap::SnapZone;
use crate::window::WindowManager;

pub use rendering::{Frame, FrameIndicator, FrameWindow};

/// Desktop engine coordinating all desktop components
///
/// This is the main entry point for desktop operations, managing:
/// - Window registry (add, close, hit testing)
/// - Input router (drag state machine)
/// - Snap indicator shown during a drag
/// - Container bounds the snap tiles are computed against
pub struct DesktopEngine {
    /// Window registry
    pub windows: WindowManager,
    /// Input router
    pub input: InputRouter,
    /// Engine configuration
    pub(crate) config: DesktopConfig,
    /// Current snap indicator
    pub(crate) indicator: Option<SnapZone>,
    /// Container bounding rectangle, if measured
    pub(crate) bounds: Option<Rect>,
    /// Source of window positions and hues
    pub(crate) rng: Box<dyn RandomSource>,
}

impl Default for DesktopEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopEngine {
    /// Create a tiling desktop with the default configuration
    pub fn new() -> Self {
        Self::build(DesktopConfig::default(), Box::new(OsRandom))
    }

    /// Create a desktop with a validated configuration
    pub fn with_config(config: DesktopConfig) -> DesktopResult<Self> {
        Self::with_random(config, Box::new(OsRandom))
    }

    /// Create a desktop with a validated configuration and a custom random source
    pub fn with_random(config: DesktopConfig, rng: Box<dyn RandomSource>) -> DesktopResult<Self> {
        config.validate()?;
        Ok(Self::build(config, rng))
    }

    fn build(config: DesktopConfig, rng: Box<dyn RandomSource>) -> Self {
        tracing::debug!(variant = ?config.variant, "desktop engine created");
        Self {
            windows: WindowManager::new(),
            input: InputRouter::new(),
            config,
            indicator: None,
            bounds: None,
            rng,
        }
    }

    /// Engine configuration
    #[inline]
    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    /// Record the container's bounding rectangle
    pub fn set_container_bounds(&mut self, bounds: Rect) {
        self.bounds = Some(bounds);
    }

    /// Forget the container bounds (e.g. container unmounted)
    pub fn clear_container_bounds(&mut self) {
        self.bounds = None;
    }

    /// Container size used for snap geometry
    ///
    /// Unmeasured or empty containers yield `None`, which skips snap geometry.
    pub(crate) fn container_size(&self) -> Option<Size> {
        self.bounds.map(|b| b.size()).filter(|s| !s.is_empty())
    }

    /// Current snap indicator
    #[inline]
    pub fn snap_indicator(&self) -> Option<SnapZone> {
        self.indicator
    }
}
