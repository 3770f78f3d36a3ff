use std::time::Duration;

use super::types::{Direction, Point};

/// Cells per side of the square playing field.
pub const GRID_SIZE: i32 = 20;

/// Side of one cell in display points.
pub const CELL_SIZE: f32 = 30.0;

pub const TICK_INTERVAL: Duration = Duration::from_millis(150);

pub const INITIAL_HEAD: Point = Point::new(5, 5);
pub const INITIAL_DIRECTION: Direction = Direction::Right;
