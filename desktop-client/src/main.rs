mod config;
mod offline;
mod state;
mod ui;

use clap::Parser;
use common::games::SessionRng;
use common::games::snake::TICK_INTERVAL;
use common::{log, logger};
use eframe::egui;
use tokio::sync::mpsc;

use config::{DEFAULT_CONFIG_FILE, get_config_manager};
use offline::run_snake_game;
use state::SharedState;
use ui::SnakeApp;

#[derive(Parser)]
#[command(name = "snake_client", about = "Single-player Snake")]
struct Args {
    /// YAML file with window and input settings.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    /// Seed for food placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Log every tick, not only game events.
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = args.use_log_prefix.then(|| "Snake".to_string());
    logger::init_logger(prefix, args.verbose);

    let config = get_config_manager(&args.config).get_config()?;
    let rng = args.seed.map(SessionRng::new).unwrap_or_else(SessionRng::from_random);
    log!("Starting snake, config {}, seed {}", args.config, rng.seed());

    let shared_state = SharedState::new();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let shared_state_clone = shared_state.clone();
    let game_thread = std::thread::spawn(move || {
        let rt = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                log!("Failed to start game runtime: {}", e);
                return;
            }
        };
        rt.block_on(run_snake_game(
            shared_state_clone,
            command_rx,
            rng,
            TICK_INTERVAL,
        ));
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("Snake"),
        ..Default::default()
    };

    let input_config = config.input.clone();
    eframe::run_native(
        "Snake",
        options,
        Box::new(move |_cc| Ok(Box::new(SnakeApp::new(shared_state, command_tx, input_config)))),
    )?;

    if game_thread.join().is_err() {
        log!("Game loop thread panicked");
    }

    Ok(())
}
