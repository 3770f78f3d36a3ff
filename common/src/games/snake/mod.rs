mod constants;
mod game_state;
mod store;
mod types;

pub use constants::{CELL_SIZE, GRID_SIZE, INITIAL_DIRECTION, INITIAL_HEAD, TICK_INTERVAL};
pub use game_state::SnakeGameState;
pub use store::SnakeStore;
pub use types::{DeathReason, Direction, Point};
