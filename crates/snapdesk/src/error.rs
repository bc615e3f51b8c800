//! Error types for the desktop engine
//!
//! Pointer and close operations are total and never fail. Errors only come
//! from the ambient edges: configuration, entropy and serialization.

use crate::window::WindowId;

/// Errors that can occur in desktop engine operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DesktopError {
    /// Window with the given ID was not found
    #[error("window not found: {0}")]
    WindowNotFound(WindowId),

    /// A configuration value is out of range
    #[error("invalid config '{field}': {reason}")]
    InvalidConfig {
        /// The offending field
        field: &'static str,
        /// Why the value was rejected
        reason: &'static str,
    },

    /// The random source could not produce bytes
    #[error("entropy error: {0}")]
    Entropy(String),

    /// JSON serialization or deserialization failed
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for DesktopError {
    fn from(e: serde_json::Error) -> Self {
        DesktopError::Serialization(e.to_string())
    }
}

/// Result type alias for desktop operations
pub type DesktopResult<T> = Result<T, DesktopError>;
