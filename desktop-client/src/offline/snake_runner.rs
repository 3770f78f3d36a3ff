use std::ops::ControlFlow;
use std::time::Duration;

use common::games::SessionRng;
use common::games::snake::SnakeStore;
use common::{log, log_verbose};
use tokio::sync::mpsc;
use tokio::time::{MissedTickBehavior, interval};

use crate::state::{ClientCommand, SharedState};

/// Drives one store at a fixed interval until the UI hangs up.
///
/// The store lives only inside this task; commands are applied between
/// ticks in arrival order and every committed snapshot is published.
pub async fn run_snake_game(
    shared_state: SharedState,
    mut command_rx: mpsc::UnboundedReceiver<ClientCommand>,
    rng: SessionRng,
    tick_interval: Duration,
) {
    let mut store = SnakeStore::new(rng);
    shared_state.update_game_state(store.state().clone());

    let mut ticker = interval(tick_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if store.state().is_game_over() {
                    continue;
                }
                let state = store.tick().clone();
                shared_state.update_game_state(state);
            }
            command = command_rx.recv() => {
                let Some(command) = command else {
                    break;
                };
                let was_over = store.state().is_game_over();
                if apply_command(&mut store, command).is_break() {
                    break;
                }
                if was_over && !store.state().is_game_over() {
                    ticker.reset();
                    shared_state.update_game_state(store.state().clone());
                }
            }
        }
    }

    log!("Game loop stopped");
}

fn apply_command(store: &mut SnakeStore, command: ClientCommand) -> ControlFlow<()> {
    match command {
        ClientCommand::Turn { direction } => {
            if store.set_direction(direction) {
                log_verbose!("Turn queued, next move {:?}", store.direction());
            }
        }
        ClientCommand::Restart => {
            if store.state().is_game_over() {
                store.reset();
            }
        }
        ClientCommand::Shutdown => return ControlFlow::Break(()),
    }
    ControlFlow::Continue(())
}
