//! Simulated desktop with edge snapping
//!
//! This crate provides the state machine behind a browser-hosted toy desktop:
//! - Window registry (add, close, hit testing)
//! - Pointer drag with a fixed grab offset
//! - Half-container tiling when a window is released near an edge
//! - A live snap indicator while dragging
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Size`, `Rect`)
//! - [`window`]: Window records and the registry
//! - [`input`]: Drag state machine and input results
//! - [`snap`]: Edge proximity tests and tile geometry
//! - [`config`]: Engine configuration and feature variants
//!
//! ## Example
//!
//! ```rust
//! use snapdesk::{DesktopEngine, DesktopConfig, Rect, ScriptedRandom};
//!
//! let mut engine = DesktopEngine::with_random(
//!     DesktopConfig::default(),
//!     Box::new(ScriptedRandom::new(vec![5, 100, 200])),
//! )
//! .unwrap();
//! engine.set_container_bounds(Rect::new(0.0, 0.0, 1000.0, 800.0));
//!
//! let id = engine.add_window().unwrap();
//! engine.start_move_drag(id, 10.0, 110.0);
//! engine.handle_pointer_move(15.0, 110.0);
//! engine.handle_pointer_up(15.0, 110.0);
//!
//! assert!(engine.windows.get(id).unwrap().snapped);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: every transition is a method on one owned engine struct
//! 2. **Injectable Randomness**: window placement and color come from a swappable source
//! 3. **No Browser in the Core**: only the `wasm` feature touches wasm-bindgen

pub mod config;
pub mod input;
pub mod math;
pub mod snap;
pub mod window;

mod engine;
mod error;
mod random;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

pub use config::{ColorConfig, DesktopConfig, Variant};
pub use engine::{DesktopEngine, Frame, FrameIndicator, FrameWindow};
pub use error::{DesktopError, DesktopResult};
pub use input::{DragState, InputResult, InputRouter};
pub use math::{FrameStyle, Rect, Size, Vec2, FRAME_STYLE};
pub use random::{OsRandom, RandomSource, ScriptedRandom};
pub use snap::{SnapZone, DEFAULT_SNAP_THRESHOLD};
pub use window::{Hsl, Window, WindowId, WindowManager, WindowRegion};
