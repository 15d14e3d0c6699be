use rand::Rng;

use crate::grid::{Coordinate, Grid};

#[derive(Debug, Clone)]
pub struct Food {
    position: Coordinate,
}

impl Food {
    pub fn new<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Self {
        Self { position: grid.random_cell(rng) }
    }

    pub fn at(position: Coordinate) -> Self {
        Self { position }
    }

    // Any cell may come up, including ones under the snake.
    pub fn respawn<R: Rng + ?Sized>(&mut self, grid: &Grid, rng: &mut R) {
        self.position = grid.random_cell(rng);
    }

    pub fn place(&mut self, position: Coordinate) {
        self.position = position;
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }
}
