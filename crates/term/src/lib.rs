//! Terminal presentation module.
//!
//! This is the display side of the raycaster: it turns the material grid
//! produced by the core scan into glyphs, and flushes them to a terminal.
//! It renders into a simple framebuffer rather than using a widget toolkit.
//!
//! Goals:
//! - Keep `core` free of any terminal concern
//! - Keep the glyph table in one place ([`view::glyph`])
//! - Only rewrite the cells that changed between frames

pub mod fb;
pub mod renderer;
pub mod view;

pub use tui_raycaster_core as core;
pub use tui_raycaster_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use view::{diagnostics, glyph, AnchorY, SceneView, Viewport};
