//! Key mapping from terminal events to decoded keys and actions.

use crate::types::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Decode a key event into the lowercase character the session consumes.
///
/// Arrow keys are folded onto the WASD layout. Non-character keys return `None`.
pub fn key_to_char(key: KeyEvent) -> Option<char> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Char(c) => c.to_lowercase().next(),
        KeyCode::Up => Some('w'),
        KeyCode::Down => Some('s'),
        KeyCode::Left => Some('a'),
        KeyCode::Right => Some('d'),
        _ => None,
    }
}

/// Map a key event straight to an action.
pub fn action_for_event(key: KeyEvent) -> Option<Action> {
    key_to_char(key).and_then(Action::from_key)
}

/// Raw mode swallows SIGINT, so Ctrl-C (and Ctrl-D) end the session instead.
pub fn is_interrupt(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('d'))
}
