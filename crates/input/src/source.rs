//! Key sources: where the session loop gets its next key from.

use std::collections::VecDeque;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::map::{is_interrupt, key_to_char};

/// Supplies one decoded (lowercase) key per frame.
pub trait KeySource {
    /// Block until the next key is available.
    ///
    /// `Ok(None)` ends the session (interrupt, or the source is exhausted).
    fn next_key(&mut self) -> Result<Option<char>>;
}

/// Blocking reader over the real terminal.
///
/// Resize, mouse and focus events are skipped, as are key releases and keys
/// that do not decode to a character.
#[derive(Debug, Default)]
pub struct TerminalKeys {
    _private: (),
}

impl TerminalKeys {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> Result<Option<char>> {
        loop {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if is_interrupt(key) {
                return Ok(None);
            }
            if let Some(c) = key_to_char(key) {
                return Ok(Some(c));
            }
        }
    }
}

/// Fixed sequence of keys, for tests, benchmarks and demos.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<char>,
}

impl ScriptedKeys {
    pub fn new(keys: &str) -> Self {
        Self {
            keys: keys.chars().flat_map(char::to_lowercase).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> Result<Option<char>> {
        Ok(self.keys.pop_front())
    }
}
