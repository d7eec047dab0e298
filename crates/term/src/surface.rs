//! The terminal surface contract the screens draw on and read keys from.

use anyhow::Result;

use crate::palette::{Palette, Tone};
use crate::types::Key;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn rows(&self) -> u16 {
        self.height
    }

    pub fn cols(&self) -> u16 {
        self.width
    }
}

/// A drawable, key-producing terminal.
///
/// Writes go to an off-screen frame and become visible on [`Surface::refresh`].
/// Coordinates are signed `(row, col)`; anything off screen is clipped.
pub trait Surface {
    /// Current terminal dimensions.
    fn size(&self) -> Viewport;

    /// Write `text` at `(row, col)` in the colours of `tone`.
    fn put_str(&mut self, row: i32, col: i32, text: &str, tone: Tone);

    fn put_char(&mut self, row: i32, col: i32, ch: char, tone: Tone) {
        let mut buf = [0u8; 4];
        self.put_str(row, col, ch.encode_utf8(&mut buf), tone);
    }

    /// Outline a rectangle, corners inclusive.
    fn draw_rect(&mut self, top: i32, left: i32, bottom: i32, right: i32, tone: Tone);

    /// Blank the whole surface at its current size.
    fn clear(&mut self);

    /// Make pending writes visible.
    fn refresh(&mut self) -> Result<()>;

    /// Next key press within the current timeout; `None` when none arrived.
    fn read_key(&mut self) -> Result<Option<Key>>;

    /// Next key press, waiting as long as it takes.
    fn read_key_blocking(&mut self) -> Result<Key>;

    fn timeout_ms(&self) -> u64;

    /// Change the wait used by [`Surface::read_key`].
    fn set_timeout(&mut self, ms: u64);

    /// Install the colours used for each [`Tone`].
    fn set_palette(&mut self, palette: Palette);

    /// Restore the terminal. Calling it again is a no-op.
    fn teardown(&mut self) -> Result<()>;
}
