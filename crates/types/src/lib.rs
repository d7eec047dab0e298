//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, screens, terminal rendering).
//!
//! # Coordinates
//!
//! Positions use terminal coordinate space: `row` grows downward and `col`
//! grows to the right. Both are signed so that a head stepping past the
//! top-left corner is still representable (and detected as a collision).
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_TICK_MS` | 100 | Input wait per loop iteration at spawn length |
//! | `MIN_TICK_MS` | 20 | Lower clamp for the speed-up rule |
//! | `SPEEDUP_DIVISOR` | 4 | One millisecond faster per this many segments |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, Key, Position};
//!
//! let pos = Position::new(10, 10);
//! assert_eq!(pos.step(Direction::Up), Position::new(9, 10));
//!
//! assert_eq!(Direction::Left.opposite(), Direction::Right);
//! assert_eq!(Direction::from_key(Key::Down), Some(Direction::Down));
//! assert_eq!(Direction::from_key(Key::Enter), None);
//! ```

/// Input wait at spawn length (100ms).
pub const BASE_TICK_MS: u64 = 100;

/// Absolute minimum input wait (20ms).
pub const MIN_TICK_MS: u64 = 20;

/// The tick interval shrinks by 1ms for every this many snake cells.
pub const SPEEDUP_DIVISOR: u64 = 4;

/// Snake length at the start of a round.
pub const INITIAL_SNAKE_LEN: usize = 3;

/// Upper bound of the random spawn offset from the screen centre.
pub const SPAWN_JITTER: i32 = 10;

pub const HEAD_GLYPH: char = '@';
pub const BODY_GLYPH: char = '#';
pub const FOOD_GLYPH: char = '*';

/// A cell in terminal coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The neighbouring cell one step towards `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dr, dc) = dir.offset();
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

/// Snake heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The 180° reversal of this heading.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Right.opposite(), Direction::Left);
    /// ```
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit `(row, col)` offset of one step.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Steering direction for an arrow key, `None` for anything else.
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Up => Some(Direction::Up),
            Key::Down => Some(Direction::Down),
            Key::Left => Some(Direction::Left),
            Key::Right => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Terminal-independent key events the screens react to.
///
/// "No key available" is modelled as `Option<Key>::None` by the callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    /// Ctrl-C.
    Interrupt,
    /// Any key without a binding.
    Other,
}

/// What a [`Position`]-bearing game object represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Head,
    Body,
    Food,
}

impl ObjectKind {
    /// Default display glyph for this kind.
    pub fn glyph(&self) -> char {
        match self {
            ObjectKind::Head => HEAD_GLYPH,
            ObjectKind::Body => BODY_GLYPH,
            ObjectKind::Food => FOOD_GLYPH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(BASE_TICK_MS, 100);
        assert_eq!(SPEEDUP_DIVISOR, 4);
        assert!(MIN_TICK_MS < BASE_TICK_MS);
        assert_eq!(INITIAL_SNAKE_LEN, 3);
    }

    #[test]
    fn opposite_is_an_involution() {
        for dir in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn step_follows_terminal_axes() {
        let p = Position::new(5, 5);
        assert_eq!(p.step(Direction::Up), Position::new(4, 5));
        assert_eq!(p.step(Direction::Down), Position::new(6, 5));
        assert_eq!(p.step(Direction::Left), Position::new(5, 4));
        assert_eq!(p.step(Direction::Right), Position::new(5, 6));
    }

    #[test]
    fn only_arrows_steer() {
        assert_eq!(Direction::from_key(Key::Left), Some(Direction::Left));
        assert_eq!(Direction::from_key(Key::Enter), None);
        assert_eq!(Direction::from_key(Key::Interrupt), None);
        assert_eq!(Direction::from_key(Key::Other), None);
    }
}
