use std::sync::{Arc, Mutex, MutexGuard};

use common::games::snake::{Direction, SnakeGameState};
use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand {
    Turn { direction: Direction },
    Restart,
    Shutdown,
}

/// Hand-off point between the game loop (writer) and the UI (reader).
#[derive(Clone, Default)]
pub struct SharedState {
    game_state: Arc<Mutex<Option<SnakeGameState>>>,
    context: Arc<Mutex<Option<egui::Context>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl SharedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes a committed snapshot and wakes the UI.
    pub fn update_game_state(&self, state: SnakeGameState) {
        *lock(&self.game_state) = Some(state);
        self.request_repaint();
    }

    pub fn get_game_state(&self) -> Option<SnakeGameState> {
        lock(&self.game_state).clone()
    }

    pub fn has_context(&self) -> bool {
        lock(&self.context).is_some()
    }

    pub fn set_context(&self, ctx: egui::Context) {
        *lock(&self.context) = Some(ctx);
    }

    fn request_repaint(&self) {
        if let Some(ctx) = lock(&self.context).as_ref() {
            ctx.request_repaint();
        }
    }
}
