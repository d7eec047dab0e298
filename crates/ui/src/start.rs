//! Start screen: title banner and the Play / Exit menu.

use anyhow::Result;
use tracing::debug;
use tui_snake_term::{Surface, Tone};

use crate::capability::{BannerFormat, Confirm, Cursor, Menu, MenuEntry, MenuFormat};
use crate::screen::{Redirection, Screen, ScreenArgs, ScreenId};
use crate::types::Key;

/// Row the title banner starts on.
pub const START_INITIAL_Y: u16 = 5;

const TITLE: &str = "Snake";
const EXIT_PROMPT: &str = "Do you want to exit?";

pub struct StartScreen {
    initial_y: u16,
    cursor_y: i32,
    menu: Menu,
}

impl Default for StartScreen {
    fn default() -> Self {
        Self::new(START_INITIAL_Y)
    }
}

impl StartScreen {
    pub fn new(initial_y: u16) -> Self {
        Self {
            initial_y,
            cursor_y: initial_y as i32,
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

    pub fn from_args(args: ScreenArgs) -> Self {
        Self::new(args.initial_y.unwrap_or(START_INITIAL_Y))
    }

    /// 1-based index of the highlighted menu entry.
    pub fn selected(&self) -> usize {
        self.menu.selected()
    }

    fn activate(&mut self, surface: &mut dyn Surface) -> Result<Option<Redirection>> {
        let Some(target) = self.menu.selected_entry().map(|e| e.target) else {
            return Ok(None);
        };

        match target {
            ScreenId::Exit => {
                if self.confirmation_loop(surface, EXIT_PROMPT)? {
                    return Ok(Some(Redirection::exit()));
                }
                debug!("exit cancelled");
                Ok(None)
            }
            target => {
                let args = ScreenArgs::default().with_viewport(surface.size());
                Ok(Some(Redirection::to(target).with_args(args)))
            }
        }
    }
}

impl Cursor for StartScreen {
    fn initial_y(&self) -> u16 {
        self.initial_y
    }

    fn cursor_y(&self) -> i32 {
        self.cursor_y
    }

    fn set_cursor_y(&mut self, y: i32) {
        self.cursor_y = y;
    }
}

impl BannerFormat for StartScreen {}

impl MenuFormat for StartScreen {
    fn menu(&self) -> &Menu {
        &self.menu
    }
}

impl Confirm for StartScreen {}

impl Screen for StartScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Start
    }

    fn render(&mut self, surface: &mut dyn Surface) -> Result<()> {
        self.reset_cursor();
        let center = surface.size().width as i32 / 2;
        self.format_banner(surface, TITLE, Tone::Accent, center);
        self.format_menu(surface);
        Ok(())
    }

    fn handle(
        &mut self,
        surface: &mut dyn Surface,
        key: Option<Key>,
    ) -> Result<Option<Redirection>> {
        match key {
            Some(Key::Up) => {
                self.menu.select_prev();
            }
            Some(Key::Down) => {
                self.menu.select_next();
            }
            Some(Key::Enter) => return self.activate(surface),
            _ => {}
        }
        Ok(None)
    }
}
