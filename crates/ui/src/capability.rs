//! Rendering and interaction capabilities shared by screens.
//!
//! Each screen opts into the capabilities it needs by implementing the
//! corresponding trait; the default methods do the work.

use anyhow::Result;
use tui_snake_term::{Surface, Tone};

use crate::error::UiError;
use crate::screen::ScreenId;
use crate::types::Key;

/// Rows taken by a banner.
pub const BANNER_HEIGHT: u16 = 3;

/// Vertical layout cursor. Rendering starts at `initial_y` and moves down as
/// components are drawn.
pub trait Cursor {
    fn initial_y(&self) -> u16;
    fn cursor_y(&self) -> i32;
    fn set_cursor_y(&mut self, y: i32);

    fn reset_cursor(&mut self) {
        let y = self.initial_y() as i32;
        self.set_cursor_y(y);
    }

    fn advance_cursor(&mut self, rows: i32) {
        let y = self.cursor_y() + rows;
        self.set_cursor_y(y);
    }
}

/// Boxed, letter-spaced title line.
pub trait BannerFormat: Cursor {
    /// Draw `text` centred on `center_col` at the cursor and move the cursor
    /// below it.
    fn format_banner(&mut self, surface: &mut dyn Surface, text: &str, tone: Tone, center_col: i32) {
        let spaced: String = text
            .chars()
            .flat_map(|c| [c, ' '])
            .collect::<String>()
            .trim_end()
            .to_string();
        let width = spaced.chars().count() as i32 + 4;
        let left = (center_col - width / 2).max(0);
        let top = self.cursor_y();

        surface.draw_rect(top, left, top + 2, left + width - 1, tone);
        surface.put_str(top + 1, left + 2, &spaced, tone);
        self.advance_cursor(BANNER_HEIGHT as i32);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub target: ScreenId,
}

/// Ordered menu with a 1-based highlighted entry. Navigation clamps at both
/// ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    entries: Vec<MenuEntry>,
    selected: usize,
}

impl Menu {
    pub fn new(entries: Vec<MenuEntry>) -> Self {
        Self {
            entries,
            selected: 1,
        }
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 1-based index of the highlighted entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&MenuEntry> {
        self.entries.get(self.selected.checked_sub(1)?)
    }

    pub fn select_prev(&mut self) -> bool {
        if self.selected > 1 {
            self.selected -= 1;
            return true;
        }
        false
    }

    pub fn select_next(&mut self) -> bool {
        if self.selected < self.entries.len() {
            self.selected += 1;
            return true;
        }
        false
    }
}

/// Centred vertical menu.
pub trait MenuFormat: Cursor {
    fn menu(&self) -> &Menu;

    /// Draw the menu below the cursor, one blank row between entries, with
    /// the selected entry highlighted.
    fn format_menu(&mut self, surface: &mut dyn Surface) {
        let half_width = surface.size().width as i32 / 2;
        let mut y = self.cursor_y();
        let selected = self.menu().selected();

        for (i, entry) in self.menu().entries().iter().enumerate() {
            let id = i + 1;
            let x = half_width - entry.label.len() as i32 / 2;
            let tone = if id == selected {
                Tone::Highlight
            } else {
                Tone::Normal
            };
            surface.put_str(y + id as i32, x, entry.label, tone);
            y += 1;
        }
        self.set_cursor_y(y);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Yes,
    No,
}

/// State of a yes/no dialog.
///
/// Starts on "yes". Right moves yes → no, Left moves no → yes; any other
/// combination leaves the choice alone. Enter answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialog {
    text: String,
    choice: Choice,
}

impl ConfirmDialog {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            choice: Choice::Yes,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn choice(&self) -> Choice {
        self.choice
    }

    /// Apply one key. Returns the answer once Enter is pressed.
    pub fn press(&mut self, key: Key) -> Result<Option<bool>, UiError> {
        match (key, self.choice) {
            (Key::Right, Choice::Yes) => self.choice = Choice::No,
            (Key::Left, Choice::No) => self.choice = Choice::Yes,
            (Key::Enter, choice) => return Ok(Some(choice == Choice::Yes)),
            (Key::Interrupt, _) => return Err(UiError::Interrupted),
            _ => {}
        }
        Ok(None)
    }

    /// Clear the surface, draw the dialog centred on it and refresh.
    ///
    /// Returns the row of the options line.
    pub fn render(&self, surface: &mut dyn Surface) -> Result<i32> {
        surface.clear();
        let vp = surface.size();
        let mid_y = vp.height as i32 / 2;
        let mid_x = vp.width as i32 / 2;
        let len = self.text.chars().count() as i32;

        surface.draw_rect(mid_y - 4, mid_x - len, mid_y + 4, mid_x + len, Tone::Normal);
        surface.put_str(mid_y, mid_x - len / 2, &self.text, Tone::Normal);

        let options_width = len / 2;
        let y = mid_y + 1;
        let yes_x = mid_x - options_width / 2 + 3;
        let no_x = mid_x + options_width / 2 - 2;
        surface.put_str(y, yes_x, "yes", self.tone_for(Choice::Yes));
        surface.put_str(y, no_x, "no", self.tone_for(Choice::No));

        surface.refresh()?;
        Ok(y)
    }

    fn tone_for(&self, choice: Choice) -> Tone {
        if self.choice == choice {
            Tone::Highlight
        } else {
            Tone::Normal
        }
    }
}

/// Blocking yes/no confirmation.
pub trait Confirm: Cursor {
    /// Run a [`ConfirmDialog`] to completion on `surface`.
    ///
    /// Reads keys without a timeout and redraws after every key, independent
    /// of the game loop. Ctrl-C surfaces as [`UiError::Interrupted`].
    fn confirmation_loop(&mut self, surface: &mut dyn Surface, text: &str) -> Result<bool> {
        let mut dialog = ConfirmDialog::new(text);
        let y = dialog.render(surface)?;
        self.set_cursor_y(y);

        loop {
            let key = surface.read_key_blocking()?;
            if let Some(answer) = dialog.press(key)? {
                return Ok(answer);
            }
            let y = dialog.render(surface)?;
            self.set_cursor_y(y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_snake_term::HeadlessSurface;

    struct Probe {
        cursor_y: i32,
        menu: Menu,
    }

    impl Probe {
        fn new() -> Self {
            Self {
                cursor_y: 2,
                menu: Menu::new(vec![
                    MenuEntry {
                        label: "Play",
                        target: ScreenId::Play,
                    },
                    MenuEntry {
                        label: "Exit",
                        target: ScreenId::Exit,
                    },
                ]),
            }
        }
    }

    impl Cursor for Probe {
        fn initial_y(&self) -> u16 {
            2
        }
        fn cursor_y(&self) -> i32 {
            self.cursor_y
        }
        fn set_cursor_y(&mut self, y: i32) {
            self.cursor_y = y;
        }
    }

    impl BannerFormat for Probe {}
    impl Confirm for Probe {}
    impl MenuFormat for Probe {
        fn menu(&self) -> &Menu {
            &self.menu
        }
    }

    #[test]
    fn menu_clamps_at_both_ends() {
        let mut menu = Probe::new().menu;
        assert_eq!(menu.selected(), 1);
        assert!(!menu.select_prev());
        assert_eq!(menu.selected(), 1);
        assert!(menu.select_next());
        assert!(!menu.select_next());
        assert_eq!(menu.selected(), 2);
        assert_eq!(menu.selected_entry().map(|e| e.target), Some(ScreenId::Exit));
    }

    #[test]
    fn dialog_toggle_is_asymmetric() {
        let mut d = ConfirmDialog::new("Quit?");
        assert_eq!(d.press(Key::Left), Ok(None));
        assert_eq!(d.choice(), Choice::Yes);
        assert_eq!(d.press(Key::Right), Ok(None));
        assert_eq!(d.choice(), Choice::No);
        assert_eq!(d.press(Key::Right), Ok(None));
        assert_eq!(d.choice(), Choice::No);
        assert_eq!(d.press(Key::Up), Ok(None));
        assert_eq!(d.press(Key::Enter), Ok(Some(false)));
        assert_eq!(d.press(Key::Left), Ok(None));
        assert_eq!(d.press(Key::Enter), Ok(Some(true)));
    }

    #[test]
    fn dialog_interrupt_is_an_error() {
        let mut d = ConfirmDialog::new("Quit?");
        assert_eq!(d.press(Key::Interrupt), Err(UiError::Interrupted));
    }

    #[test]
    fn confirmation_loop_renders_before_the_first_key() {
        let mut probe = Probe::new();
        let mut surface = HeadlessSurface::new(60, 20).with_keys([Key::Right, Key::Enter]);
        let answer = probe
            .confirmation_loop(&mut surface, "Do you want to exit?")
            .unwrap();
        assert!(!answer);
        assert_eq!(surface.refreshes(), 2);
        assert!(surface.last_frame().contains("Do you want to exit?"));
        assert_eq!(probe.cursor_y(), 11);
    }

    #[test]
    fn confirmation_loop_highlights_the_choice() {
        let mut probe = Probe::new();
        let mut surface = HeadlessSurface::new(60, 20).with_keys([Key::Right, Key::Enter]);
        probe.confirmation_loop(&mut surface, "Do you want to exit?").unwrap();

        // 60x20 surface, 20-char prompt: options row 11, "yes" at 28, "no" at 33.
        let frame = surface.frame();
        let highlight = surface.palette().highlight;
        assert_eq!(frame.get(33, 11).unwrap().ch, 'n');
        assert_eq!(frame.get(33, 11).unwrap().style, highlight);
        assert_eq!(frame.get(28, 11).unwrap().ch, 'y');
        assert_ne!(frame.get(28, 11).unwrap().style, highlight);
    }

    #[test]
    fn banner_and_menu_advance_the_cursor() {
        let mut probe = Probe::new();
        let mut surface = HeadlessSurface::new(40, 20);
        surface.clear();
        probe.format_banner(&mut surface, "Snake", Tone::Accent, 20);
        assert_eq!(probe.cursor_y(), 5);
        probe.format_menu(&mut surface);
        assert_eq!(probe.cursor_y(), 7);

        let frame = surface.frame();
        assert!(frame.row_text(3).contains("S n a k e"));
        assert!(frame.row_text(6).contains("Play"));
        assert!(frame.row_text(8).contains("Exit"));
        let play_col = frame.row_text(6).find("Play").unwrap() as u16;
        assert_eq!(
            frame.get(play_col, 6).unwrap().style,
            surface.palette().highlight
        );
    }
}
