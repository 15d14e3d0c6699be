use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::GameConfig;
use crate::food::Food;
use crate::grid::{Coordinate, Grid};
use crate::snake::{Collision, Direction, Snake};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Phase {
    Running,
    Over,
}

/// Outcome of one `GameState::tick`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct TickResult {
    /// Whether the game is still running after this tick
    pub running: bool,
    /// Points earned during this tick
    pub score_delta: u32,
    /// True only on the tick that ended the game
    pub game_over: bool,
}

/// Read-only view handed to the renderer.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Snapshot {
    pub snake_body: Vec<Coordinate>,
    pub food_position: Coordinate,
    pub score: u32,
    pub running: bool,
}

pub struct GameState {
    config: GameConfig,
    grid: Grid,
    snake: Snake,
    food: Food,
    score: u32,
    ticks: u64,
    phase: Phase,
    collision: Option<Collision>,
    rng: StdRng,
}

impl GameState {
    /// Starts a game; the config is validated first so the simulation never
    /// sees an empty board or a snake off the grid.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self::with_rng(config, rng))
    }

    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_rng(config, StdRng::seed_from_u64(seed)))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let grid = config.grid();
        let snake = config.initial_snake();
        let food = Food::new(&grid, &mut rng);
        Self {
            config,
            grid,
            snake,
            food,
            score: 0,
            ticks: 0,
            phase: Phase::Running,
            collision: None,
            rng,
        }
    }

    /// Advances the game one step. Does nothing once the game is over.
    pub fn tick(&mut self) -> TickResult {
        if self.phase == Phase::Over {
            return TickResult { running: false, score_delta: 0, game_over: false };
        }
        self.ticks += 1;
        self.snake.move_forward();

        let mut score_delta = 0;
        if self.snake.head() == self.food.position() {
            self.snake.grow();
            self.food.respawn(&self.grid, &mut self.rng);
            score_delta = self.config.food_reward;
            self.score += score_delta;
        }

        self.collision = self.snake.collision(&self.grid);
        if self.collision.is_some() {
            self.phase = Phase::Over;
        }

        TickResult {
            running: self.is_running(),
            score_delta,
            game_over: !self.is_running(),
        }
    }

    pub fn handle_direction(&mut self, direction: Direction) {
        if self.phase == Phase::Running {
            self.snake.change_direction(direction);
        }
    }

    /// Throws the finished game away and starts a fresh one. Ignored while running.
    pub fn handle_restart(&mut self) {
        if self.phase == Phase::Running {
            return;
        }
        let config = self.config.clone();
        let rng = std::mem::replace(&mut self.rng, StdRng::seed_from_u64(0));
        *self = Self::with_rng(config, rng);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            snake_body: self.snake.body().to_vec(),
            food_position: self.food.position(),
            score: self.score,
            running: self.is_running(),
        }
    }

    pub fn place_food(&mut self, position: Coordinate) {
        self.food.place(position);
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Cause of the game over, if the game has ended.
    pub fn collision(&self) -> Option<Collision> {
        self.collision
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Coordinate {
        self.food.position()
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
