use serde::{Deserialize, Serialize};

use crate::grid::{Coordinate, Grid};

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    // Returns the opposite direction (180°).
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    // Unit step (dx, dy) in cells; y grows downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// What the head ran into.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Collision {
    Wall,
    SelfHit,
}

#[derive(Clone, Debug)]
pub struct Snake {
    body: Vec<Coordinate>, // body[0] - head
    direction: Direction,
    cell_size: i32,
}

impl Snake {
    pub fn new(
        head: Coordinate,
        init_length: usize,
        direction: Direction,
        cell_size: i32,
    ) -> Snake {
        let mut body = Vec::with_capacity(init_length.max(1));
        body.push(head);
        let (dx, dy) = direction.opposite().delta();
        for i in 1..init_length {
            // every next segment sits one cell further away from the heading
            let step = cell_size * i as i32;
            body.push(head.offset(dx * step, dy * step));
        }
        Snake { body, direction, cell_size }
    }

    /// Builds a snake from explicit segments, head first. An empty list is
    /// replaced by a single segment at the origin.
    pub fn from_body(mut body: Vec<Coordinate>, direction: Direction, cell_size: i32) -> Snake {
        if body.is_empty() {
            body.push(Coordinate::new(0, 0));
        }
        Snake { body, direction, cell_size }
    }

    pub fn head(&self) -> Coordinate {
        self.body[0]
    }

    pub fn tail(&self) -> Coordinate {
        self.body[self.body.len() - 1]
    }

    pub fn body(&self) -> &[Coordinate] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Turns the head unless `new_direction` would reverse it; reversals are dropped.
    pub fn change_direction(&mut self, new_direction: Direction) -> bool {
        if new_direction == self.direction.opposite() {
            return false;
        }
        self.direction = new_direction;
        true
    }

    /// Shifts the body one cell forward: new head in front, tail dropped.
    pub fn move_forward(&mut self) {
        let (dx, dy) = self.direction.delta();
        let new_head = self.head().offset(dx * self.cell_size, dy * self.cell_size);
        self.body.insert(0, new_head);
        self.body.pop();
    }

    /// Doubles the tail segment; it unfolds into a real segment on the next move.
    pub fn grow(&mut self) {
        let tail = self.tail();
        self.body.push(tail);
    }

    pub fn collision(&self, grid: &Grid) -> Option<Collision> {
        let head = self.head();
        if !grid.in_bounds(head) {
            return Some(Collision::Wall);
        }
        if self.body[1..].contains(&head) {
            return Some(Collision::SelfHit);
        }
        None
    }

    pub fn check_collision(&self, grid: &Grid) -> bool {
        self.collision(grid).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> Snake {
        Snake::new(Coordinate::new(100, 100), 3, Direction::Right, 20)
    }

    fn coords(points: &[(i32, i32)]) -> Vec<Coordinate> {
        points.iter().map(|&(x, y)| Coordinate::new(x, y)).collect()
    }

    #[test]
    fn test_initial_layout() {
        let snake = start();
        assert_eq!(snake.body(), coords(&[(100, 100), (80, 100), (60, 100)]).as_slice());
        assert_eq!(snake.direction(), Direction::Right);

        let up = Snake::new(Coordinate::new(40, 40), 3, Direction::Up, 20);
        assert_eq!(up.body(), coords(&[(40, 40), (40, 60), (40, 80)]).as_slice());
    }

    #[test]
    fn test_opposites() {
        for dir in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
        }
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
    }

    #[test]
    fn test_reversal_rejected() {
        for dir in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            let mut snake = Snake::new(Coordinate::new(300, 300), 3, dir, 20);
            assert!(!snake.change_direction(dir.opposite()));
            assert_eq!(snake.direction(), dir);
        }
    }

    #[test]
    fn test_last_accepted_turn_wins() {
        let mut snake = start();
        assert!(snake.change_direction(Direction::Up));
        // Down is now the reversal of Up
        assert!(!snake.change_direction(Direction::Down));
        assert!(snake.change_direction(Direction::Left));
        assert_eq!(snake.direction(), Direction::Left);
    }

    #[test]
    fn test_move_shifts_by_one_cell() {
        let mut snake = start();
        snake.move_forward();
        assert_eq!(snake.body(), coords(&[(120, 100), (100, 100), (80, 100)]).as_slice());

        snake.change_direction(Direction::Down);
        snake.move_forward();
        assert_eq!(snake.body(), coords(&[(120, 120), (120, 100), (100, 100)]).as_slice());
    }

    #[test]
    fn test_grow_duplicates_tail_then_unfolds() {
        let mut snake = start();
        snake.grow();
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.body()[2], snake.body()[3]);

        snake.move_forward();
        assert_eq!(snake.len(), 4);
        assert_eq!(
            snake.body(),
            coords(&[(120, 100), (100, 100), (80, 100), (60, 100)]).as_slice()
        );
    }

    #[test]
    fn test_wall_collision() {
        let grid = Grid::default();
        let cases = [(-20, 100), (600, 100), (100, -20), (100, 600)];
        for (x, y) in cases {
            let snake = Snake::from_body(coords(&[(x, y), (100, 100)]), Direction::Right, 20);
            assert_eq!(snake.collision(&grid), Some(Collision::Wall), "head at ({x}, {y})");
        }
        assert!(!start().check_collision(&grid));
    }

    #[test]
    fn test_self_collision() {
        let grid = Grid::default();
        let snake = Snake::from_body(
            coords(&[(100, 100), (120, 100), (120, 120), (100, 120), (100, 100)]),
            Direction::Up,
            20,
        );
        assert_eq!(snake.collision(&grid), Some(Collision::SelfHit));
    }

    #[test]
    fn test_empty_body_is_replaced() {
        let snake = Snake::from_body(Vec::new(), Direction::Right, 20);
        assert_eq!(snake.len(), 1);
    }
}
