//! Screen state machine: the screen contract, redirections and the registry
//! that turns a redirection into the next active screen.

use anyhow::Result;
use tracing::debug;
use tui_snake_term::{Surface, Viewport};

use crate::error::UiError;
use crate::play::PlayScreen;
use crate::settings::Settings;
use crate::start::StartScreen;
use crate::types::Key;

/// Identifier of a screen. `Exit` is a sentinel with no screen behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Start,
    Play,
    Exit,
}

impl ScreenId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenId::Start => "start",
            ScreenId::Play => "play",
            ScreenId::Exit => "exit",
        }
    }
}

/// A unit of the UI that owns its state for as long as it is active.
pub trait Screen {
    fn id(&self) -> ScreenId;

    /// Paint the current state. Repeated calls with unchanged state paint the
    /// same frame.
    fn render(&mut self, surface: &mut dyn Surface) -> Result<()>;

    /// Consume one input event (`None` when the read timed out).
    ///
    /// Returns a [`Redirection`] to hand control to another screen.
    fn handle(&mut self, surface: &mut dyn Surface, key: Option<Key>)
        -> Result<Option<Redirection>>;
}

/// Constructor arguments forwarded with a redirection. Every field is
/// optional; see [`ScreenArgs::merge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenArgs {
    /// Terminal size the new screen should lay itself out for.
    pub viewport: Option<Viewport>,
    /// First row the screen draws on.
    pub initial_y: Option<u16>,
    /// RNG seed for a Play round.
    pub seed: Option<u64>,
}

impl ScreenArgs {
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = Some(viewport);
        self
    }

    pub fn with_initial_y(mut self, initial_y: u16) -> Self {
        self.initial_y = Some(initial_y);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Combine two argument sets; fields set in `overrides` win.
    pub fn merge(self, overrides: ScreenArgs) -> Self {
        Self {
            viewport: overrides.viewport.or(self.viewport),
            initial_y: overrides.initial_y.or(self.initial_y),
            seed: overrides.seed.or(self.seed),
        }
    }
}

/// Request to replace the active screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirection {
    pub target: ScreenId,
    pub args: ScreenArgs,
}

impl Redirection {
    pub fn to(target: ScreenId) -> Self {
        Self {
            target,
            args: ScreenArgs::default(),
        }
    }

    pub fn exit() -> Self {
        Self::to(ScreenId::Exit)
    }

    pub fn with_args(mut self, args: ScreenArgs) -> Self {
        self.args = args;
        self
    }

    pub fn is_exit(&self) -> bool {
        self.target == ScreenId::Exit
    }
}

/// What resolving a [`Redirection`] leads to.
pub enum Transition {
    Enter(Box<dyn Screen>),
    Exit,
}

pub type ScreenCtor = Box<dyn Fn(&Settings, ScreenArgs) -> Result<Box<dyn Screen>>>;

/// Ordered table from screen id to constructor, built once at startup.
#[derive(Default)]
pub struct ScreenRegistry {
    entries: Vec<(ScreenId, Option<ScreenCtor>)>,
}

impl ScreenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start, Play, and the Exit sentinel.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(ScreenId::Start, |_, args| {
            Ok(Box::new(StartScreen::from_args(args)) as Box<dyn Screen>)
        });
        registry.register(ScreenId::Play, |settings, args| {
            Ok(Box::new(PlayScreen::new(settings, args)?) as Box<dyn Screen>)
        });
        registry.register_sentinel(ScreenId::Exit);
        registry
    }

    /// Register (or replace) the constructor for `id`.
    pub fn register<F>(&mut self, id: ScreenId, ctor: F)
    where
        F: Fn(&Settings, ScreenArgs) -> Result<Box<dyn Screen>> + 'static,
    {
        self.insert(id, Some(Box::new(ctor)));
    }

    /// Register `id` as a terminal state with no screen.
    pub fn register_sentinel(&mut self, id: ScreenId) {
        self.insert(id, None);
    }

    fn insert(&mut self, id: ScreenId, ctor: Option<ScreenCtor>) {
        match self.entries.iter_mut().find(|(known, _)| *known == id) {
            Some(entry) => entry.1 = ctor,
            None => self.entries.push((id, ctor)),
        }
    }

    /// Registered ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = ScreenId> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }

    pub fn contains(&self, id: ScreenId) -> bool {
        self.ids().any(|known| known == id)
    }

    /// Build the screen registered for `id` with `args`.
    pub fn construct(
        &self,
        id: ScreenId,
        args: ScreenArgs,
        settings: &Settings,
    ) -> Result<Transition> {
        let (_, ctor) = self
            .entries
            .iter()
            .find(|(known, _)| *known == id)
            .ok_or(UiError::Unregistered(id.as_str()))?;

        match ctor {
            None => Ok(Transition::Exit),
            Some(ctor) => Ok(Transition::Enter(ctor(settings, args)?)),
        }
    }

    /// Resolve `redirection`. The redirection's own arguments override the
    /// ones supplied by the caller.
    pub fn resolve(
        &self,
        redirection: Redirection,
        caller_args: ScreenArgs,
        settings: &Settings,
    ) -> Result<Transition> {
        debug!(screen = redirection.target.as_str(), "resolving redirection");
        let args = caller_args.merge(redirection.args);
        self.construct(redirection.target, args, settings)
    }
}
