use crate::game::Snapshot;
use crate::grid::{Coordinate, Grid};

pub const BACKGROUND: [u8; 4] = [0x00, 0x00, 0x00, 0xFF];
pub const OUTLINE: [u8; 4] = [0x00, 0x00, 0x00, 0xFF];
pub const SNAKE: [u8; 4] = [0x00, 0x80, 0x00, 0xFF];
pub const FOOD: [u8; 4] = [0xFF, 0x00, 0x00, 0xFF];

/// Draws one frame. `frame` is RGBA, `grid.width * grid.height` pixels.
pub fn draw(frame: &mut [u8], grid: &Grid, snapshot: &Snapshot) {
    for pixel in frame.chunks_exact_mut(4) {
        pixel.copy_from_slice(&BACKGROUND);
    }

    fill_cell(frame, grid, snapshot.food_position, FOOD);
    for seg in &snapshot.snake_body {
        fill_cell(frame, grid, *seg, SNAKE);
    }

    if !snapshot.running {
        dim(frame);
    }
}

// one cell with a 1px outline; pixels off the board are skipped
fn fill_cell(frame: &mut [u8], grid: &Grid, cell: Coordinate, color: [u8; 4]) {
    let size = grid.cell_size;
    for dy in 0..size {
        for dx in 0..size {
            let px = cell.x + dx;
            let py = cell.y + dy;
            if px < 0 || py < 0 || px >= grid.width || py >= grid.height {
                continue;
            }
            let edge = dx == 0 || dy == 0 || dx == size - 1 || dy == size - 1;
            let i = ((py * grid.width + px) * 4) as usize;
            let rgba = if edge { OUTLINE } else { color };
            if i + 4 <= frame.len() {
                frame[i..i + 4].copy_from_slice(&rgba);
            }
        }
    }
}

fn dim(frame: &mut [u8]) {
    for pixel in frame.chunks_exact_mut(4) {
        pixel[0] /= 2;
        pixel[1] /= 2;
        pixel[2] /= 2;
    }
}

/// Window title doubling as the score label and game-over notice.
pub fn title(snapshot: &Snapshot) -> String {
    if snapshot.running {
        format!("Snake Game | Score: {}", snapshot.score)
    } else {
        format!("Snake Game | Score: {} | GAME OVER - press R to restart", snapshot.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(frame: &[u8], grid: &Grid, x: i32, y: i32) -> [u8; 4] {
        let i = ((y * grid.width + x) * 4) as usize;
        [frame[i], frame[i + 1], frame[i + 2], frame[i + 3]]
    }

    fn snapshot(running: bool) -> Snapshot {
        Snapshot {
            snake_body: vec![Coordinate::new(20, 0), Coordinate::new(0, 0)],
            food_position: Coordinate::new(40, 40),
            score: 20,
            running,
        }
    }

    #[test]
    fn test_draws_cells_with_outline() {
        let grid = Grid::new(60, 60, 20);
        let mut frame = vec![0xAA; 60 * 60 * 4];
        draw(&mut frame, &grid, &snapshot(true));

        assert_eq!(pixel(&frame, &grid, 30, 10), SNAKE);
        assert_eq!(pixel(&frame, &grid, 10, 10), SNAKE);
        assert_eq!(pixel(&frame, &grid, 50, 50), FOOD);
        assert_eq!(pixel(&frame, &grid, 20, 0), OUTLINE);
        assert_eq!(pixel(&frame, &grid, 59, 59), OUTLINE);
        assert_eq!(pixel(&frame, &grid, 10, 50), BACKGROUND);
    }

    #[test]
    fn test_snake_drawn_over_food() {
        let grid = Grid::new(60, 60, 20);
        let mut frame = vec![0; 60 * 60 * 4];
        let mut snap = snapshot(true);
        snap.food_position = Coordinate::new(0, 0);
        draw(&mut frame, &grid, &snap);
        assert_eq!(pixel(&frame, &grid, 10, 10), SNAKE);
    }

    #[test]
    fn test_off_board_head_is_clipped() {
        let grid = Grid::new(60, 60, 20);
        let mut frame = vec![0; 60 * 60 * 4];
        let mut snap = snapshot(false);
        snap.snake_body.insert(0, Coordinate::new(-20, 0));
        draw(&mut frame, &grid, &snap);
        assert_eq!(frame.len(), 60 * 60 * 4);
    }

    #[test]
    fn test_game_over_dims() {
        let grid = Grid::new(60, 60, 20);
        let mut frame = vec![0; 60 * 60 * 4];
        draw(&mut frame, &grid, &snapshot(false));
        assert_eq!(pixel(&frame, &grid, 50, 50), [0x7F, 0x00, 0x00, 0xFF]);
    }

    #[test]
    fn test_title() {
        assert_eq!(title(&snapshot(true)), "Snake Game | Score: 20");
        assert!(title(&snapshot(false)).ends_with("GAME OVER - press R to restart"));
    }
}
