use rand::Rng;
use serde::{Deserialize, Serialize};

/// A cell corner on the board, in pixels. Always a multiple of the cell size.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Coordinate {
        Coordinate { x: self.x + dx, y: self.y + dy }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32, cell_size: i32) -> Self {
        Self { width, height, cell_size }
    }

    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    pub fn in_bounds(&self, c: Coordinate) -> bool {
        c.x >= 0 && c.y >= 0 && c.x < self.width && c.y < self.height
    }

    pub fn is_aligned(&self, c: Coordinate) -> bool {
        c.x % self.cell_size == 0 && c.y % self.cell_size == 0
    }

    /// Uniformly random grid-aligned cell inside the bounds.
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Coordinate {
        let x = rng.gen_range(0..self.columns()) * self.cell_size;
        let y = rng.gen_range(0..self.rows()) * self.cell_size;
        Coordinate { x, y }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(600, 600, 20)
    }
}
