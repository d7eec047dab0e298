//! Play screen: score banner, arena, and one round of the play engine.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};
use tui_snake_core::{Border, FoodSpawn, PlayEngine};
use tui_snake_term::{Surface, Tone, Viewport};

use crate::capability::{BannerFormat, Confirm, Cursor, BANNER_HEIGHT};
use crate::error::UiError;
use crate::screen::{Redirection, Screen, ScreenArgs, ScreenId};
use crate::settings::Settings;
use crate::types::{Direction, Key};

/// Row the score banner starts on.
pub const PLAY_INITIAL_Y: u16 = 1;

pub struct PlayScreen {
    initial_y: u16,
    cursor_y: i32,
    engine: PlayEngine,
    arena_full: bool,
}

impl PlayScreen {
    /// Start a round sized for `args.viewport`.
    ///
    /// The RNG is seeded from `args.seed`, then `settings.seed`, then entropy.
    pub fn new(settings: &Settings, args: ScreenArgs) -> Result<Self, UiError> {
        let viewport = args.viewport.ok_or(UiError::MissingArgument {
            screen: "play",
            arg: "viewport",
        })?;
        let initial_y = args.initial_y.unwrap_or(PLAY_INITIAL_Y);

        let rng = match args.seed.or(settings.seed) {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let border = arena_for(viewport, initial_y);
        let engine = PlayEngine::new(border, settings.engine_config(), rng);
        info!(
            width = viewport.width,
            height = viewport.height,
            "round started"
        );

        Ok(Self::with_engine(engine, initial_y))
    }

    /// Wrap an existing engine (e.g. one with a hand-placed snake).
    pub fn with_engine(engine: PlayEngine, initial_y: u16) -> Self {
        Self {
            initial_y,
            cursor_y: initial_y as i32,
            engine,
            arena_full: false,
        }
    }

    pub fn engine(&self) -> &PlayEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut PlayEngine {
        &mut self.engine
    }

    pub fn score(&self) -> u32 {
        self.engine.score()
    }

    fn game_over(&mut self, surface: &mut dyn Surface, cause: &str) -> Result<Option<Redirection>> {
        let score = self.engine.score();
        info!(score, cause, "round over");
        let prompt = format!("You scored {score}. Would you like to try again ?");
        let redirect = if self.confirmation_loop(surface, &prompt)? {
            Redirection::to(ScreenId::Start)
        } else {
            Redirection::exit()
        };
        Ok(Some(redirect))
    }
}

/// Arena below a banner that starts on `initial_y`.
fn arena_for(viewport: Viewport, initial_y: u16) -> Border {
    let banner_bottom = initial_y as i32 + BANNER_HEIGHT as i32;
    Border::layout(viewport.rows(), viewport.cols(), banner_bottom)
}

impl Cursor for PlayScreen {
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

impl BannerFormat for PlayScreen {}

impl Confirm for PlayScreen {}

impl Screen for PlayScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Play
    }

    /// Draws banner, arena and snake, then makes sure food is on the arena.
    fn render(&mut self, surface: &mut dyn Surface) -> Result<()> {
        self.reset_cursor();
        let viewport = surface.size();
        let title = format!("Score : {}", self.engine.score());
        self.format_banner(surface, &title, Tone::Accent, viewport.width as i32 / 2);

        let border = Border::layout(viewport.rows(), viewport.cols(), self.cursor_y);
        self.engine.relayout(border);
        surface.draw_rect(border.top, border.left, border.bottom, border.right, Tone::Normal);

        for segment in self.engine.snake() {
            surface.put_char(segment.pos.row, segment.pos.col, segment.glyph, Tone::Normal);
        }

        match self.engine.spawn_food() {
            FoodSpawn::ArenaFull => {
                warn!(score = self.engine.score(), "no room left for food");
                self.arena_full = true;
            }
            FoodSpawn::Present(_) | FoodSpawn::Placed(_) => {}
        }
        if let Some(food) = self.engine.food() {
            surface.put_char(food.pos.row, food.pos.col, food.glyph, Tone::Normal);
        }
        Ok(())
    }

    /// One tick: move, score, then collision check and the retry dialog.
    fn handle(
        &mut self,
        surface: &mut dyn Surface,
        key: Option<Key>,
    ) -> Result<Option<Redirection>> {
        let outcome = self.engine.tick(key.and_then(Direction::from_key));
        if outcome.ate {
            surface.set_timeout(self.engine.tick_interval_ms());
        }

        if let Some(collision) = outcome.collision {
            return self.game_over(surface, collision.as_str());
        }
        if self.arena_full {
            return self.game_over(surface, "arena full");
        }
        Ok(None)
    }
}
