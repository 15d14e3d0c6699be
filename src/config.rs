use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::grid::{Coordinate, Grid};
use crate::snake::{Direction, Snake};

/// Board size, pacing and starting layout. Missing JSON fields fall back to
/// the classic 600x600 board with 20px cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
    /// Milliseconds between ticks
    pub tick_ms: u64,
    /// Points per food eaten
    pub food_reward: u32,
    pub initial_head: Coordinate,
    pub initial_length: usize,
    pub initial_direction: Direction,
    /// Fixed RNG seed for reproducible food placement
    pub seed: Option<u64>,
    pub log_file: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            cell_size: 20,
            tick_ms: 150,
            food_reward: 10,
            initial_head: Coordinate::new(100, 100),
            initial_length: 3,
            initial_direction: Direction::Right,
            seed: None,
            log_file: None,
        }
    }
}

impl GameConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("could not read config {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&content)
            .with_context(|| format!("could not parse config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.cell_size <= 0 {
            bail!("cell_size must be positive, got {}", self.cell_size);
        }
        if self.width <= 0 || self.height <= 0 {
            bail!("board must be non-empty, got {}x{}", self.width, self.height);
        }
        if self.width % self.cell_size != 0 || self.height % self.cell_size != 0 {
            bail!(
                "board {}x{} is not a multiple of cell_size {}",
                self.width,
                self.height,
                self.cell_size
            );
        }
        if self.tick_ms == 0 {
            bail!("tick_ms must be positive");
        }
        if self.initial_length == 0 {
            bail!("initial_length must be at least 1");
        }
        let grid = self.grid();
        if !grid.is_aligned(self.initial_head) {
            bail!("initial_head {:?} is not on a cell corner", self.initial_head);
        }
        if !grid.in_bounds(self.initial_head) {
            bail!("initial_head {:?} is off the board", self.initial_head);
        }
        // longer than the board is wide or tall can never fit
        let longest = grid.columns().max(grid.rows()) as usize;
        if self.initial_length > longest {
            bail!(
                "initial_length {} exceeds the board ({} cells)",
                self.initial_length,
                longest
            );
        }
        let snake = self.initial_snake();
        if let Some(seg) = snake.body().iter().find(|seg| !grid.in_bounds(**seg)) {
            bail!("initial snake leaves the board at {:?}", seg);
        }
        Ok(())
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.width, self.height, self.cell_size)
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn initial_snake(&self) -> Snake {
        Snake::new(
            self.initial_head,
            self.initial_length,
            self.initial_direction,
            self.cell_size,
        )
    }
}
