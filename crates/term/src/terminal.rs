//! `Surface` backed by a real terminal through crossterm.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};

use crate::fb::FrameBuffer;
use crate::input::{is_press, map_key_event};
use crate::palette::{Palette, Tone};
use crate::renderer::TerminalRenderer;
use crate::surface::{Surface, Viewport};
use crate::types::Key;

/// Fallback used when the terminal size cannot be queried.
const FALLBACK_SIZE: (u16, u16) = (80, 24);

pub struct TermSurface {
    renderer: TerminalRenderer,
    fb: FrameBuffer,
    palette: Palette,
    timeout: Duration,
    active: bool,
}

impl TermSurface {
    /// Take over the terminal (raw mode + alternate screen).
    pub fn enter(timeout_ms: u64) -> Result<Self> {
        let mut renderer = TerminalRenderer::new();
        renderer.enter()?;
        let (w, h) = crossterm::terminal::size().unwrap_or(FALLBACK_SIZE);
        Ok(Self {
            renderer,
            fb: FrameBuffer::new(w, h),
            palette: Palette::default(),
            timeout: Duration::from_millis(timeout_ms),
            active: true,
        })
    }

    /// Keys are the only events screens see; a resize forces a full redraw.
    fn key_from_event(&mut self, ev: Event) -> Option<Key> {
        match ev {
            Event::Key(key) if is_press(&key) => Some(map_key_event(key)),
            Event::Resize(..) => {
                self.renderer.invalidate();
                None
            }
            _ => None,
        }
    }
}

impl Surface for TermSurface {
    fn size(&self) -> Viewport {
        let (w, h) = crossterm::terminal::size().unwrap_or(FALLBACK_SIZE);
        Viewport::new(w, h)
    }

    fn put_str(&mut self, row: i32, col: i32, text: &str, tone: Tone) {
        self.fb.put_str(row, col, text, self.palette.style(tone));
    }

    fn draw_rect(&mut self, top: i32, left: i32, bottom: i32, right: i32, tone: Tone) {
        self.fb
            .draw_rect(top, left, bottom, right, self.palette.style(tone));
    }

    fn clear(&mut self) {
        let vp = self.size();
        self.fb.resize(vp.width, vp.height);
        self.fb.clear(self.palette.normal.cell(' '));
    }

    fn refresh(&mut self) -> Result<()> {
        self.renderer.draw(&self.fb)
    }

    fn read_key(&mut self) -> Result<Option<Key>> {
        if !event::poll(self.timeout)? {
            return Ok(None);
        }
        let ev = event::read()?;
        Ok(self.key_from_event(ev))
    }

    fn read_key_blocking(&mut self) -> Result<Key> {
        loop {
            let ev = event::read()?;
            if let Some(key) = self.key_from_event(ev) {
                return Ok(key);
            }
        }
    }

    fn timeout_ms(&self) -> u64 {
        self.timeout.as_millis() as u64
    }

    fn set_timeout(&mut self, ms: u64) {
        self.timeout = Duration::from_millis(ms);
    }

    fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    fn teardown(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.renderer.exit()
    }
}

/// Restores the terminal when the surface is dropped without an explicit
/// teardown (early `?` returns in `main`).
impl Drop for TermSurface {
    fn drop(&mut self) {
        let _ = self.teardown();
    }
}
