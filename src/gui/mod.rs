//! Screen-Space GUI
//!
//! UI elements drawn at fixed logical-screen positions, independent of the
//! camera:
//!
//! - [`Menu`] - title screen list with a wrapping cursor
//! - [`DebugOverlay`] - F3 diagnostic bar (position, camera, FPS)

pub mod debug_overlay;
pub mod menu;

pub use debug_overlay::{DebugOverlay, DebugStats};
pub use menu::{Menu, MenuItem};
