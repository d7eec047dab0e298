//! Screen layer - navigation state machine and the game loop
//!
//! - [`screen`]: the [`Screen`] contract, [`Redirection`]s and the
//!   [`ScreenRegistry`] that resolves them
//! - [`start`] / [`play`]: the two concrete screens
//! - [`capability`]: banner, menu and confirmation behaviour shared by screens
//! - [`settings`]: startup configuration, passed by reference
//! - [`app`]: the [`GameLoop`] driver
//!
//! # Example
//!
//! ```
//! use tui_snake_term::HeadlessSurface;
//! use tui_snake_types::Key;
//! use tui_snake_ui::{GameLoop, ScreenRegistry, Settings};
//!
//! // Select "Exit", confirm with the default "yes".
//! let surface = HeadlessSurface::new(80, 24).with_keys([Key::Down, Key::Enter, Key::Enter]);
//! let settings = Settings::default();
//! let mut game = GameLoop::new(surface, &settings, ScreenRegistry::standard()).unwrap();
//! game.run().unwrap();
//! assert_eq!(game.surface().teardowns(), 1);
//! ```

pub mod app;
pub mod capability;
pub mod error;
pub mod play;
pub mod screen;
pub mod settings;
pub mod start;

pub use tui_snake_core as core;
pub use tui_snake_term as term;
pub use tui_snake_types as types;

pub use app::{Flow, GameLoop};
pub use capability::{BannerFormat, Confirm, ConfirmDialog, Cursor, Menu, MenuEntry, MenuFormat};
pub use error::UiError;
pub use play::PlayScreen;
pub use screen::{Redirection, Screen, ScreenArgs, ScreenId, ScreenRegistry, Transition};
pub use settings::Settings;
pub use start::StartScreen;
