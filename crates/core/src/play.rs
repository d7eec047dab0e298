//! Play engine - one round of Snake
//!
//! Owns the score, the snake, the optional food and the arena border. The
//! engine is driven by two calls per loop iteration:
//!
//! 1. [`PlayEngine::spawn_food`] while rendering, so a fresh piece of food is
//!    visible before the player reacts to it.
//! 2. [`PlayEngine::tick`] with the key read for this iteration: moves the
//!    snake, scores food and evaluates collisions.
//!
//! The engine never touches the terminal. Speed-up is exposed through
//! [`PlayEngine::tick_interval_ms`] and applied by the caller.

use rand::rngs::StdRng;
use rand::Rng;
use tracing::{debug, warn};

use crate::border::Border;
use crate::object::GameObject;
use crate::snake::Snake;
use crate::types::{
    Direction, Position, BASE_TICK_MS, INITIAL_SNAKE_LEN, MIN_TICK_MS, SPAWN_JITTER,
    SPEEDUP_DIVISOR,
};

/// Random food samples per playable cell before falling back to a scan.
const SAMPLE_BUDGET_FACTOR: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub base_tick_ms: u64,
    pub min_tick_ms: u64,
    pub initial_length: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_tick_ms: BASE_TICK_MS,
            min_tick_ms: MIN_TICK_MS,
            initial_length: INITIAL_SNAKE_LEN,
        }
    }
}

/// Why a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Head touched or crossed the arena border.
    Border,
    /// Head ran into a body segment.
    SelfBite,
}

impl Collision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collision::Border => "border",
            Collision::SelfBite => "self",
        }
    }
}

/// Result of a single [`PlayEngine::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    pub ate: bool,
    pub collision: Option<Collision>,
}

impl TickOutcome {
    pub fn is_terminal(&self) -> bool {
        self.collision.is_some()
    }
}

/// Result of [`PlayEngine::spawn_food`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodSpawn {
    /// Food already on the arena; nothing changed.
    Present(Position),
    /// A new piece of food was placed.
    Placed(Position),
    /// Every playable cell is occupied by the snake.
    ArenaFull,
}

#[derive(Debug, Clone)]
pub struct PlayEngine<R: Rng = StdRng> {
    score: u32,
    snake: Snake,
    food: Option<GameObject>,
    border: Border,
    config: EngineConfig,
    rng: R,
}

impl<R: Rng> PlayEngine<R> {
    /// Start a round inside `border` with a snake spawned near the arena centre.
    pub fn new(border: Border, config: EngineConfig, mut rng: R) -> Self {
        let head = spawn_head(&border, config.initial_length, &mut rng);
        let snake = Snake::new(head, config.initial_length, Direction::Up);
        debug!(row = head.row, col = head.col, "snake spawned");
        Self::with_snake(border, config, snake, rng)
    }

    /// Start a round with an explicit snake.
    pub fn with_snake(border: Border, config: EngineConfig, snake: Snake, rng: R) -> Self {
        Self {
            score: 0,
            snake,
            food: None,
            border,
            config,
            rng,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<&GameObject> {
        self.food.as_ref()
    }

    pub fn border(&self) -> Border {
        self.border
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Place food at `pos`, replacing any existing food.
    pub fn set_food(&mut self, pos: Position) {
        self.food = Some(GameObject::food(pos));
    }

    pub fn clear_food(&mut self) {
        self.food = None;
    }

    /// Replace the arena border (the terminal may have been resized).
    ///
    /// Food left outside the new playable area is dropped so it gets respawned.
    pub fn relayout(&mut self, border: Border) {
        self.border = border;
        if self.food.is_some_and(|f| border.is_breached(f.pos)) {
            self.food = None;
        }
    }

    /// Input wait for the current snake length.
    ///
    /// Decreases by one millisecond per [`SPEEDUP_DIVISOR`] cells, never
    /// below `min_tick_ms`.
    pub fn tick_interval_ms(&self) -> u64 {
        let speedup = self.snake.len() as u64 / SPEEDUP_DIVISOR;
        self.config
            .base_tick_ms
            .saturating_sub(speedup)
            .max(self.config.min_tick_ms)
    }

    /// Ensure food is on the arena.
    ///
    /// Samples uniformly random playable cells until one is free of the
    /// snake. After `SAMPLE_BUDGET_FACTOR` samples per playable cell the
    /// arena is scanned row by row instead, so a nearly full arena still
    /// terminates; a completely full arena reports [`FoodSpawn::ArenaFull`].
    pub fn spawn_food(&mut self) -> FoodSpawn {
        if let Some(food) = &self.food {
            return FoodSpawn::Present(food.pos);
        }

        let area = self.border.interior_area();
        if area == 0 {
            warn!("arena has no playable cells");
            return FoodSpawn::ArenaFull;
        }

        let b = self.border;
        for _ in 0..area * SAMPLE_BUDGET_FACTOR {
            let pos = Position::new(
                self.rng.gen_range(b.top + 1..b.bottom),
                self.rng.gen_range(b.left + 1..b.right),
            );
            if !self.snake.contains(pos) {
                return self.place_food(pos);
            }
        }

        let free = b.interior_cells().find(|&p| !self.snake.contains(p));
        match free {
            Some(pos) => self.place_food(pos),
            None => {
                warn!(len = self.snake.len(), "arena full, no cell left for food");
                FoodSpawn::ArenaFull
            }
        }
    }

    fn place_food(&mut self, pos: Position) -> FoodSpawn {
        debug!(row = pos.row, col = pos.col, "food placed");
        self.food = Some(GameObject::food(pos));
        FoodSpawn::Placed(pos)
    }

    /// Advance the round by one step.
    ///
    /// Moves the snake (applying `input` unless it is a reversal), scores and
    /// clears eaten food, then checks the head against the border and the body.
    pub fn tick(&mut self, input: Option<Direction>) -> TickOutcome {
        let ate = self.snake.advance(input, self.food.as_ref());
        if ate {
            self.score += 1;
            self.food = None;
            debug!(score = self.score, len = self.snake.len(), "food eaten");
        }

        let head = self.snake.head_pos();
        let collision = if self.border.is_breached(head) {
            Some(Collision::Border)
        } else if self.snake.contains_body(head) {
            Some(Collision::SelfBite)
        } else {
            None
        };

        TickOutcome { ate, collision }
    }
}

/// Head cell for a new round: a little below and left of the arena centre.
///
/// The jitter is drawn from the room actually available, so the head and the
/// trailing body start inside the arena without piling onto one clamped row.
fn spawn_head<R: Rng>(border: &Border, length: usize, rng: &mut R) -> Position {
    let tail_room = length.saturating_sub(1) as i32;
    let max_row = (border.bottom - 1 - tail_room).max(border.top + 1);
    let min_col = border.left + 1;

    let mid_row = ((border.top + border.bottom) / 2).min(max_row);
    let mid_col = ((border.left + border.right) / 2).max(min_col);
    let row = mid_row + jitter(rng, max_row - mid_row);
    let col = mid_col - jitter(rng, mid_col - min_col);

    border.clamp_inside(Position::new(row, col))
}

/// Uniform in `1..=min(SPAWN_JITTER, room)`, or 0 when there is no room.
fn jitter<R: Rng>(rng: &mut R, room: i32) -> i32 {
    let cap = room.min(SPAWN_JITTER);
    if cap < 1 {
        return 0;
    }
    rng.gen_range(1..=cap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn engine_with(snake: Snake, border: Border) -> PlayEngine {
        PlayEngine::with_snake(
            border,
            EngineConfig::default(),
            snake,
            StdRng::seed_from_u64(1),
        )
    }

    #[test]
    fn new_round_starts_inside_the_arena() {
        let border = Border::new(2, 5, 20, 60);
        for seed in 0..64 {
            let engine = PlayEngine::new(border, EngineConfig::default(), StdRng::seed_from_u64(seed));
            assert_eq!(engine.score(), 0);
            assert_eq!(engine.snake().len(), INITIAL_SNAKE_LEN);
            assert_eq!(engine.snake().heading(), Direction::Up);
            assert!(engine.snake().iter().all(|c| border.strictly_contains(c.pos)));
            assert!(engine.food().is_none());
        }
    }

    #[test]
    fn spawn_row_varies_within_the_room_left_for_the_tail() {
        // 80x24 arena: midpoint row 13, the tail needs rows up to 20.
        let border = Border::new(5, 20, 21, 60);
        let mut rows = std::collections::BTreeSet::new();
        for seed in 0..64 {
            let engine =
                PlayEngine::new(border, EngineConfig::default(), StdRng::seed_from_u64(seed));
            let head = engine.snake().head_pos();
            assert!((14..=18).contains(&head.row), "{head:?}");
            assert!((30..=39).contains(&head.col), "{head:?}");
            rows.insert(head.row);
        }
        assert_eq!(rows.len(), 5);
    }

    #[test]
    fn spawn_clamps_in_a_short_arena() {
        let border = Border::new(0, 0, 5, 40);
        let engine = PlayEngine::new(border, EngineConfig::default(), StdRng::seed_from_u64(3));
        assert!(engine.snake().iter().all(|c| border.strictly_contains(c.pos)));
    }

    #[test]
    fn eating_scores_and_clears_food() {
        let snake = Snake::new(Position::new(10, 10), 3, Direction::Up);
        let mut engine = engine_with(snake, Border::new(2, 5, 20, 60));
        engine.set_food(Position::new(9, 10));

        let outcome = engine.tick(None);
        assert!(outcome.ate);
        assert!(!outcome.is_terminal());
        assert_eq!(engine.score(), 1);
        assert!(engine.food().is_none());
        assert_eq!(engine.snake().len(), 4);
    }

    #[test]
    fn border_contact_is_terminal() {
        let snake = Snake::new(Position::new(3, 30), 3, Direction::Up);
        let mut engine = engine_with(snake, Border::new(2, 5, 20, 60));
        let outcome = engine.tick(None);
        assert_eq!(engine.snake().head_pos(), Position::new(2, 30));
        assert_eq!(outcome.collision, Some(Collision::Border));
    }

    #[test]
    fn each_edge_is_terminal() {
        let border = Border::new(2, 5, 20, 60);
        let cases = [
            (Position::new(3, 30), Direction::Up),
            (Position::new(19, 30), Direction::Down),
            (Position::new(10, 6), Direction::Left),
            (Position::new(10, 59), Direction::Right),
        ];
        for (head, dir) in cases {
            let mut engine = engine_with(Snake::new(head, 1, dir), border);
            assert_eq!(engine.tick(None).collision, Some(Collision::Border), "{dir:?}");
        }
    }

    #[test]
    fn self_bite_is_terminal() {
        let snake = Snake::new(Position::new(10, 10), 5, Direction::Up);
        let mut engine = engine_with(snake, Border::new(2, 5, 20, 60));
        assert!(!engine.tick(Some(Direction::Left)).is_terminal());
        assert!(!engine.tick(Some(Direction::Down)).is_terminal());
        assert_eq!(
            engine.tick(Some(Direction::Right)).collision,
            Some(Collision::SelfBite)
        );
    }

    #[test]
    fn tick_interval_shrinks_with_length() {
        let border = Border::new(0, 0, 100, 100);
        let short = engine_with(Snake::new(Position::new(50, 50), 3, Direction::Up), border);
        let long = engine_with(Snake::new(Position::new(50, 50), 40, Direction::Up), border);
        assert_eq!(short.tick_interval_ms(), BASE_TICK_MS);
        assert_eq!(long.tick_interval_ms(), BASE_TICK_MS - 10);
        assert!(long.tick_interval_ms() < short.tick_interval_ms());
    }

    #[test]
    fn tick_interval_is_clamped() {
        let config = EngineConfig {
            base_tick_ms: 5,
            min_tick_ms: 3,
            initial_length: 3,
        };
        let snake = Snake::new(Position::new(50, 50), 40, Direction::Up);
        let engine = PlayEngine::with_snake(
            Border::new(0, 0, 100, 100),
            config,
            snake,
            StdRng::seed_from_u64(0),
        );
        assert_eq!(engine.tick_interval_ms(), 3);
    }

    #[test]
    fn spawned_food_avoids_the_snake() {
        let border = Border::new(0, 0, 4, 4);
        // 3x3 interior, snake covers all but (3,3).
        let cells = [
            Position::new(1, 1),
            Position::new(1, 2),
            Position::new(1, 3),
            Position::new(2, 3),
            Position::new(2, 2),
            Position::new(2, 1),
            Position::new(3, 1),
            Position::new(3, 2),
        ];
        let snake = Snake::from_cells(&cells, Direction::Left).unwrap();
        let mut engine = engine_with(snake, border);
        assert_eq!(engine.spawn_food(), FoodSpawn::Placed(Position::new(3, 3)));
        assert_eq!(engine.spawn_food(), FoodSpawn::Present(Position::new(3, 3)));
    }

    #[test]
    fn full_arena_reports_starvation() {
        let border = Border::new(0, 0, 3, 3);
        let cells = [
            Position::new(1, 1),
            Position::new(1, 2),
            Position::new(2, 2),
            Position::new(2, 1),
        ];
        let snake = Snake::from_cells(&cells, Direction::Up).unwrap();
        let mut engine = engine_with(snake, border);
        assert_eq!(engine.spawn_food(), FoodSpawn::ArenaFull);
        assert!(engine.food().is_none());
    }

    #[test]
    fn relayout_drops_food_outside_the_new_border() {
        let snake = Snake::new(Position::new(10, 10), 3, Direction::Up);
        let mut engine = engine_with(snake, Border::new(2, 5, 20, 60));
        engine.set_food(Position::new(18, 50));
        engine.relayout(Border::new(2, 5, 15, 40));
        assert!(engine.food().is_none());
    }
}
