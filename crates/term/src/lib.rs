//! Terminal surface module.
//!
//! A small, game-oriented rendering layer: screens write styled text into a
//! framebuffer through the [`Surface`] trait, and a renderer flushes only the
//! changed cells to the terminal.
//!
//! - [`TermSurface`]: the real terminal (crossterm)
//! - [`HeadlessSurface`]: scripted keys and an in-memory frame, for tests
//!
//! Goals:
//! - Keep `core` free of I/O
//! - Keep the screens testable without a TTY

pub mod fb;
pub mod headless;
pub mod palette;
pub mod renderer;
pub mod surface;
pub mod terminal;

pub use tui_snake_input as input;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use headless::HeadlessSurface;
pub use palette::{Palette, Tone};
pub use renderer::{encode_into, TerminalRenderer};
pub use surface::{Surface, Viewport};
pub use terminal::TermSurface;
