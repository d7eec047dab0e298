//! Process-wide settings, built once at startup and passed by reference.

use tui_snake_core::EngineConfig;
use tui_snake_term::{Palette, Surface};

use crate::error::UiError;
use crate::types::{BASE_TICK_MS, INITIAL_SNAKE_LEN, MIN_TICK_MS};

#[derive(Debug, Clone)]
pub struct Settings {
    /// Input wait per loop iteration at spawn length.
    pub base_tick_ms: u64,
    /// Floor for the speed-up rule.
    pub min_tick_ms: u64,
    /// Fixed seed for every Play round; entropy when unset.
    pub seed: Option<u64>,
    /// Destination for `tracing` output.
    pub log_path: Option<String>,
    pub palette: Palette,
    configured: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_tick_ms: BASE_TICK_MS,
            min_tick_ms: MIN_TICK_MS,
            seed: None,
            log_path: None,
            palette: Palette::default(),
            configured: false,
        }
    }
}

impl Settings {
    /// Create from environment variables.
    ///
    /// - `SNAKE_TICK_MS`: base tick interval (default 100)
    /// - `SNAKE_MIN_TICK_MS`: tick interval floor (default 20)
    /// - `SNAKE_SEED`: RNG seed for reproducible rounds
    /// - `SNAKE_LOG_PATH`: write logs to this file
    pub fn from_env() -> Self {
        use std::env;

        let defaults = Self::default();

        let base_tick_ms = env::var("SNAKE_TICK_MS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u64| ms > 0)
            .unwrap_or(defaults.base_tick_ms);

        let min_tick_ms = env::var("SNAKE_MIN_TICK_MS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.min_tick_ms)
            .min(base_tick_ms);

        let seed = env::var("SNAKE_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok());

        let log_path = env::var("SNAKE_LOG_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            base_tick_ms,
            min_tick_ms,
            seed,
            log_path,
            ..defaults
        }
    }

    /// Pin every Play round to `seed`.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Install the palette on `surface`.
    ///
    /// Fails with [`UiError::AlreadyConfigured`] on a second call.
    pub fn configure(&mut self, surface: &mut dyn Surface) -> Result<(), UiError> {
        if self.configured {
            return Err(UiError::AlreadyConfigured);
        }
        surface.set_palette(self.palette);
        surface.set_timeout(self.base_tick_ms);
        self.configured = true;
        Ok(())
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            base_tick_ms: self.base_tick_ms,
            min_tick_ms: self.min_tick_ms,
            initial_length: INITIAL_SNAKE_LEN,
        }
    }
}
