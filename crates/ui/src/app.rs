//! Game loop: render the active screen, read one key, let the screen handle
//! it, and follow redirections until Exit.

use anyhow::{bail, Result};
use tracing::{debug, info};
use tui_snake_term::Surface;

use crate::error::UiError;
use crate::screen::{Redirection, Screen, ScreenArgs, ScreenId, ScreenRegistry, Transition};
use crate::settings::Settings;
use crate::start::START_INITIAL_Y;
use crate::types::Key;

/// Whether the loop keeps running after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct GameLoop<'s, S: Surface> {
    surface: S,
    settings: &'s Settings,
    registry: ScreenRegistry,
    active: Box<dyn Screen>,
}

impl<'s, S: Surface> GameLoop<'s, S> {
    /// Build the loop with the Start screen active.
    pub fn new(surface: S, settings: &'s Settings, registry: ScreenRegistry) -> Result<Self> {
        let args = ScreenArgs::default()
            .with_viewport(surface.size())
            .with_initial_y(START_INITIAL_Y);
        let active = match registry.construct(ScreenId::Start, args, settings)? {
            Transition::Enter(screen) => screen,
            Transition::Exit => bail!("start screen is registered as a sentinel"),
        };

        Ok(Self {
            surface,
            settings,
            registry,
            active,
        })
    }

    pub fn active_id(&self) -> ScreenId {
        self.active.id()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Run until an Exit redirection has torn the surface down.
    pub fn run(&mut self) -> Result<()> {
        loop {
            if self.step()? == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// One iteration: clear, render, refresh, read one key, handle it.
    pub fn step(&mut self) -> Result<Flow> {
        self.surface.clear();
        self.active.render(&mut self.surface)?;
        self.surface.refresh()?;

        let key = self.surface.read_key()?;
        let redirection = if key == Some(Key::Interrupt) {
            Some(Redirection::exit())
        } else {
            match self.active.handle(&mut self.surface, key) {
                Ok(redirection) => redirection,
                Err(err) if UiError::is_interrupt(&err) => Some(Redirection::exit()),
                Err(err) => return Err(err),
            }
        };

        match redirection {
            Some(redirection) => self.redirect(redirection),
            None => Ok(Flow::Continue),
        }
    }

    fn redirect(&mut self, redirection: Redirection) -> Result<Flow> {
        debug!(
            from = self.active.id().as_str(),
            to = redirection.target.as_str(),
            "redirect"
        );
        let caller_args = ScreenArgs::default().with_viewport(self.surface.size());

        match self
            .registry
            .resolve(redirection, caller_args, self.settings)?
        {
            Transition::Exit => {
                info!("exiting");
                self.surface.teardown()?;
                Ok(Flow::Exit)
            }
            Transition::Enter(screen) => {
                self.active = screen;
                self.surface.set_timeout(self.settings.base_tick_ms);
                Ok(Flow::Continue)
            }
        }
    }
}
