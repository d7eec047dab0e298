//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the snake rules, state management, and simulation
//! logic. It has **no dependencies** on terminals or screens, making it:
//!
//! - **Deterministic**: A seeded RNG produces identical rounds
//! - **Testable**: Every movement and collision rule is unit tested
//! - **Portable**: Can run headless or behind any surface
//!
//! # Module Structure
//!
//! - [`object`]: positioned game objects with positional `same_cell` comparison
//! - [`snake`]: the segmented snake, its heading and movement rule
//! - [`border`]: the arena rectangle derived from terminal size
//! - [`play`]: one round of gameplay (score, food, ticks, collisions)
//!
//! # Example
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use tui_snake_core::{Border, EngineConfig, PlayEngine};
//! use tui_snake_types::Direction;
//!
//! let border = Border::new(2, 5, 20, 60);
//! let mut engine = PlayEngine::new(border, EngineConfig::default(), StdRng::seed_from_u64(7));
//! engine.spawn_food();
//!
//! let outcome = engine.tick(Some(Direction::Left));
//! assert!(outcome.collision.is_none());
//! assert_eq!(engine.snake().len(), 3 + outcome.ate as usize);
//! ```

pub mod border;
pub mod object;
pub mod play;
pub mod snake;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use border::Border;
pub use object::GameObject;
pub use play::{Collision, EngineConfig, FoodSpawn, PlayEngine, TickOutcome};
pub use snake::Snake;
