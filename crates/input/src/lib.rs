//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any screen logic. It maps
//! `crossterm` key events into [`crate::types::Key`], the small key vocabulary
//! the screens understand. Controls are fixed: arrows steer and navigate,
//! Enter confirms, Ctrl-C interrupts.

pub mod map;

pub use tui_snake_types as types;

pub use map::{is_press, map_key_event};
