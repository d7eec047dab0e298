//! In-memory `Surface` that replays scripted keys.
//!
//! Used by tests and benchmarks to drive screens without a terminal. Every
//! call that matters to the game flow is recorded so it can be asserted on.

use std::collections::VecDeque;

use anyhow::{anyhow, Result};

use crate::fb::FrameBuffer;
use crate::palette::{Palette, Tone};
use crate::surface::{Surface, Viewport};
use crate::types::{Key, BASE_TICK_MS};

#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    viewport: Viewport,
    fb: FrameBuffer,
    palette: Palette,
    keys: VecDeque<Option<Key>>,
    timeout_ms: u64,
    timeouts: Vec<u64>,
    last_frame: String,
    refreshes: usize,
    teardowns: usize,
    palette_installs: usize,
}

impl HeadlessSurface {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            viewport: Viewport::new(width, height),
            fb: FrameBuffer::new(width, height),
            palette: Palette::default(),
            keys: VecDeque::new(),
            timeout_ms: BASE_TICK_MS,
            timeouts: Vec::new(),
            last_frame: String::new(),
            refreshes: 0,
            teardowns: 0,
            palette_installs: 0,
        }
    }

    /// Queue key presses.
    pub fn with_keys(mut self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.keys.extend(keys.into_iter().map(Some));
        self
    }

    pub fn push_key(&mut self, key: Key) {
        self.keys.push_back(Some(key));
    }

    /// Queue a timed-out read (no key this iteration).
    pub fn push_idle(&mut self) {
        self.keys.push_back(None);
    }

    /// Simulate a terminal resize.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Viewport::new(width, height);
    }

    pub fn pending_keys(&self) -> usize {
        self.keys.len()
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.fb
    }

    /// Text of the frame as of the latest refresh.
    pub fn last_frame(&self) -> &str {
        &self.last_frame
    }

    /// Every timeout set so far, oldest first.
    pub fn timeouts(&self) -> &[u64] {
        &self.timeouts
    }

    pub fn refreshes(&self) -> usize {
        self.refreshes
    }

    pub fn teardowns(&self) -> usize {
        self.teardowns
    }

    pub fn palette_installs(&self) -> usize {
        self.palette_installs
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

impl Surface for HeadlessSurface {
    fn size(&self) -> Viewport {
        self.viewport
    }

    fn put_str(&mut self, row: i32, col: i32, text: &str, tone: Tone) {
        self.fb.put_str(row, col, text, self.palette.style(tone));
    }

    fn draw_rect(&mut self, top: i32, left: i32, bottom: i32, right: i32, tone: Tone) {
        self.fb
            .draw_rect(top, left, bottom, right, self.palette.style(tone));
    }

    fn clear(&mut self) {
        self.fb.resize(self.viewport.width, self.viewport.height);
        self.fb.clear(self.palette.normal.cell(' '));
    }

    fn refresh(&mut self) -> Result<()> {
        self.refreshes += 1;
        self.last_frame = self.fb.text();
        Ok(())
    }

    /// An empty script behaves like a timed-out read.
    fn read_key(&mut self) -> Result<Option<Key>> {
        Ok(self.keys.pop_front().flatten())
    }

    /// Idle entries are skipped; an exhausted script is an error rather than
    /// a hang.
    fn read_key_blocking(&mut self) -> Result<Key> {
        while let Some(next) = self.keys.pop_front() {
            if let Some(key) = next {
                return Ok(key);
            }
        }
        Err(anyhow!("scripted input exhausted while waiting for a key"))
    }

    fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    fn set_timeout(&mut self, ms: u64) {
        self.timeout_ms = ms;
        self.timeouts.push(ms);
    }

    fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
        self.palette_installs += 1;
    }

    fn teardown(&mut self) -> Result<()> {
        self.teardowns += 1;
        Ok(())
    }
}
