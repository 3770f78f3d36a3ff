mod snake_runner;

pub use snake_runner::run_snake_game;
