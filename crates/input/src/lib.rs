//! Terminal input module (session-facing).
//!
//! This module is intentionally independent of the renderer. It decodes
//! `crossterm` key events into lowercase characters, maps those characters to
//! [`crate::types::Action`]s, and provides the [`KeySource`] seam the session
//! loop reads from (a blocking terminal source and a scripted one for tests).

pub mod map;
pub mod source;

pub use tui_raycaster_types as types;

pub use map::{action_for_event, is_interrupt, key_to_char};
pub use source::{KeySource, ScriptedKeys, TerminalKeys};
