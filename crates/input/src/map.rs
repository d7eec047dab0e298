//! Key mapping from terminal events to screen keys.

use crate::types::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a keyboard event to a [`Key`].
///
/// Unbound keys map to [`Key::Other`] so that they still count as an input
/// event for the screen that receives them.
pub fn map_key_event(key: KeyEvent) -> Key {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Key::Interrupt;
    }

    match key.code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Enter | KeyCode::Char('\n') | KeyCode::Char('\r') => Key::Enter,
        _ => Key::Other,
    }
}

/// Only presses count; terminal auto-repeat and release events are ignored.
pub fn is_press(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
}
