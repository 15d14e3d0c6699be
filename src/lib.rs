//! Grid snake: a pure, tick-driven simulation (`grid`, `snake`, `food`, `game`)
//! and a winit/pixels front end (`input`, `render`, `event_loop`) that feeds
//! it key presses and draws its snapshots.

pub mod config;
pub mod event_loop;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod log;
pub mod render;
pub mod snake;

pub use config::GameConfig;
pub use game::{GameState, Phase, Snapshot, TickResult};
pub use grid::{Coordinate, Grid};
pub use snake::{Collision, Direction, Snake};
