//! Window management module
//!
//! Provides window records, the ordered registry and hit testing.

#[allow(clippy::module_inception)]
mod window;
mod color;
mod config;
mod region;
mod manager;

pub use window::Window;
pub use color::Hsl;
pub use config::WindowConfig;
pub use region::WindowRegion;
pub use manager::WindowManager;

/// Unique window identifier
pub type WindowId = u64;
