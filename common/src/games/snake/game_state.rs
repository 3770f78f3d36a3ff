use std::collections::VecDeque;

use rand::Rng;

use crate::games::SessionRng;
use super::constants::{GRID_SIZE, INITIAL_DIRECTION, INITIAL_HEAD};
use super::types::{DeathReason, Direction, Point};

/// One immutable snapshot of a snake game. `advance` produces the next
/// snapshot instead of mutating this one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeGameState {
    /// Head first. Never empty.
    pub snake: VecDeque<Point>,
    pub direction: Direction,
    pub food: Point,
    pub score: u32,
    pub death_reason: Option<DeathReason>,
    pub moves: u64,
}

impl SnakeGameState {
    pub fn new(rng: &mut SessionRng) -> Self {
        Self {
            snake: VecDeque::from([INITIAL_HEAD]),
            direction: INITIAL_DIRECTION,
            food: random_cell(rng),
            score: 0,
            death_reason: None,
            moves: 0,
        }
    }

    pub fn head(&self) -> Point {
        *self.snake.front().expect("Snake body should never be empty")
    }

    pub fn length(&self) -> usize {
        self.snake.len()
    }

    pub fn is_game_over(&self) -> bool {
        self.death_reason.is_some()
    }

    pub fn advance(&self, rng: &mut SessionRng) -> SnakeGameState {
        if self.is_game_over() {
            return self.clone();
        }

        let new_head = self.head().step(self.direction);

        let mut moved_body = self.snake.clone();
        moved_body.pop_back();
        moved_body.push_front(new_head);

        if let Err(reason) = check_collision(new_head, &moved_body) {
            return SnakeGameState {
                death_reason: Some(reason),
                ..self.clone()
            };
        }

        if new_head == self.food {
            let mut grown = self.snake.clone();
            grown.push_front(new_head);
            SnakeGameState {
                snake: grown,
                food: random_cell(rng),
                score: self.score + 1,
                moves: self.moves + 1,
                ..self.clone()
            }
        } else {
            SnakeGameState {
                snake: moved_body,
                moves: self.moves + 1,
                ..self.clone()
            }
        }
    }
}

// The tail has already been dropped from `moved_body`, so the cell it
// vacates this tick is free.
fn check_collision(new_head: Point, moved_body: &VecDeque<Point>) -> Result<(), DeathReason> {
    if !new_head.in_bounds() {
        return Err(DeathReason::WallCollision);
    }
    if moved_body.iter().skip(1).any(|p| *p == new_head) {
        return Err(DeathReason::SelfCollision);
    }
    Ok(())
}

/// Uniform over the whole field; cells under the snake are not excluded.
fn random_cell(rng: &mut SessionRng) -> Point {
    Point::new(rng.random_range(0..GRID_SIZE), rng.random_range(0..GRID_SIZE))
}
