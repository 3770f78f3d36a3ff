use crate::games::SessionRng;
use crate::{log, log_verbose};
use super::game_state::SnakeGameState;
use super::types::Direction;

/// Owner of the authoritative snake snapshot.
///
/// Direction intents are buffered in `pending_direction` and only reach the
/// snapshot at the start of the next `tick`. Not thread-safe on purpose:
/// confine it to a single task and feed it through a channel.
pub struct SnakeStore {
    state: SnakeGameState,
    pending_direction: Option<Direction>,
    rng: SessionRng,
}

impl SnakeStore {
    pub fn new(mut rng: SessionRng) -> Self {
        let state = SnakeGameState::new(&mut rng);
        log!("New game, seed {}, food at {}", rng.seed(), state.food);
        Self {
            state,
            pending_direction: None,
            rng,
        }
    }

    pub fn state(&self) -> &SnakeGameState {
        &self.state
    }

    /// Direction the snake will move on the next tick.
    pub fn direction(&self) -> Direction {
        self.pending_direction.unwrap_or(self.state.direction)
    }

    /// Returns `false` when the request is ignored: a reversal of the
    /// direction the snake last moved in, or any request after game over.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if self.state.is_game_over() || direction.is_opposite(&self.state.direction) {
            log_verbose!("Ignored turn {:?} while moving {:?}", direction, self.state.direction);
            return false;
        }
        self.pending_direction = Some(direction);
        true
    }

    pub fn reset(&mut self) {
        self.state = SnakeGameState::new(&mut self.rng);
        self.pending_direction = None;
        log!("Game restarted, food at {}", self.state.food);
    }

    pub fn tick(&mut self) -> &SnakeGameState {
        if self.state.is_game_over() {
            return &self.state;
        }

        let mut current = self.state.clone();
        if let Some(direction) = self.pending_direction.take() {
            current.direction = direction;
        }

        let next = current.advance(&mut self.rng);

        if let Some(reason) = next.death_reason {
            log!(
                "Game over: snake {} at {}. Score: {}",
                reason,
                next.head(),
                next.score
            );
        } else if next.score > current.score {
            log!(
                "Ate food at {}. Score: {}, next food at {}",
                next.head(),
                next.score,
                next.food
            );
        } else {
            log_verbose!("Move {}: head at {}", next.moves, next.head());
        }

        self.state = next;
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::games::snake::{GRID_SIZE, Point};

    fn store_with(body: &[(i32, i32)], direction: Direction, food: (i32, i32)) -> SnakeStore {
        let mut store = SnakeStore::new(SessionRng::new(42));
        store.state = SnakeGameState {
            snake: body.iter().map(|&(x, y)| Point::new(x, y)).collect::<VecDeque<_>>(),
            direction,
            food: Point::new(food.0, food.1),
            score: 0,
            death_reason: None,
            moves: 0,
        };
        store
    }

    #[test]
    fn test_reverse_direction_is_rejected() {
        for current in [Direction::Left, Direction::Right, Direction::Up, Direction::Down] {
            let mut store = store_with(&[(10, 10), (10, 11)], current, (0, 0));
            assert!(!store.set_direction(current.opposite()));
            assert_eq!(store.direction(), current);
        }
    }

    #[test]
    fn test_turn_applies_on_next_tick_only() {
        let mut store = store_with(&[(5, 5)], Direction::Right, (0, 0));
        assert!(store.set_direction(Direction::Down));
        assert_eq!(store.direction(), Direction::Down);
        assert_eq!(store.state().direction, Direction::Right);

        store.tick();
        assert_eq!(store.state().head(), Point::new(5, 6));
        assert_eq!(store.state().direction, Direction::Down);
    }

    #[test]
    fn test_last_turn_before_tick_wins() {
        let mut store = store_with(&[(5, 5)], Direction::Right, (0, 0));
        assert!(store.set_direction(Direction::Up));
        assert!(store.set_direction(Direction::Down));
        store.tick();
        assert_eq!(store.state().head(), Point::new(5, 6));
    }

    #[test]
    fn test_quick_turns_cannot_chain_into_reversal() {
        let mut store = store_with(&[(5, 5), (4, 5), (3, 5)], Direction::Right, (0, 0));
        assert!(store.set_direction(Direction::Up));
        assert!(!store.set_direction(Direction::Left));
        store.tick();
        assert!(!store.state().is_game_over());
        assert_eq!(store.state().head(), Point::new(5, 4));
    }

    #[test]
    fn test_reset_restores_initial_configuration() {
        let mut store = store_with(&[(0, 5), (1, 5)], Direction::Left, (10, 10));
        store.state.score = 7;
        store.tick();
        assert!(store.state().is_game_over());

        store.reset();
        let state = store.state();
        assert_eq!(state.snake, VecDeque::from([Point::new(5, 5)]));
        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.score, 0);
        assert!(!state.is_game_over());
        assert!((0..GRID_SIZE).contains(&state.food.x));
        assert!((0..GRID_SIZE).contains(&state.food.y));
    }

    #[test]
    fn test_reset_clears_pending_turn() {
        let mut store = store_with(&[(5, 5)], Direction::Right, (0, 0));
        store.set_direction(Direction::Up);
        store.reset();
        assert_eq!(store.direction(), Direction::Right);
        store.tick();
        assert_eq!(store.state().head(), Point::new(6, 5));
    }

    #[test]
    fn test_game_over_freezes_store() {
        let mut store = store_with(&[(19, 3)], Direction::Right, (0, 0));
        store.tick();
        assert!(store.state().is_game_over());
        let frozen = store.state().clone();

        assert!(!store.set_direction(Direction::Down));
        store.tick();
        assert_eq!(store.state(), &frozen);
    }
}
