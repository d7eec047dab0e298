//! Style tags used by the screens and the colours they resolve to.

use crate::fb::{CellStyle, Rgb};

/// What a piece of text means, independent of its colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    #[default]
    Normal,
    /// Banners: yellow on black.
    Accent,
    /// Selected menu entry or dialog option: black on white.
    Highlight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub normal: CellStyle,
    pub accent: CellStyle,
    pub highlight: CellStyle,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            normal: CellStyle::default(),
            accent: CellStyle {
                fg: Rgb::new(240, 220, 80),
                bg: Rgb::new(0, 0, 0),
                bold: true,
            },
            highlight: CellStyle {
                fg: Rgb::new(0, 0, 0),
                bg: Rgb::new(240, 240, 240),
                bold: false,
            },
        }
    }
}

impl Palette {
    pub fn style(&self, tone: Tone) -> CellStyle {
        match tone {
            Tone::Normal => self.normal,
            Tone::Accent => self.accent,
            Tone::Highlight => self.highlight,
        }
    }
}
