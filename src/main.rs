//! Terminal Snake runner (default binary).
//!
//! Takes over the terminal, runs the screen loop from the Start screen until
//! the player confirms Exit, and restores the terminal on the way out.

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use tui_snake::term::{Surface, TermSurface};
use tui_snake::ui::{GameLoop, ScreenRegistry, Settings};

fn main() -> Result<()> {
    let mut settings = Settings::from_env();
    init_logging(&settings)?;

    let mut surface = TermSurface::enter(settings.base_tick_ms)?;
    settings.configure(&mut surface)?;

    let mut game = GameLoop::new(surface, &settings, ScreenRegistry::standard())?;
    let result = game.run();

    // Always try to restore terminal state; a no-op after a clean Exit.
    let _ = game.surface_mut().teardown();
    if let Err(err) = &result {
        tracing::error!(error = %err, "game loop failed");
    }
    result
}

/// Log to `SNAKE_LOG_PATH` when set; the terminal itself belongs to the game.
fn init_logging(settings: &Settings) -> Result<()> {
    let Some(path) = settings.log_path.as_deref() else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("cannot create log file {path}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}
