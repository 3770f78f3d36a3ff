use common::games::snake::{
    CELL_SIZE, Direction, GRID_SIZE, Point, SnakeGameState, TICK_INTERVAL,
};
use eframe::egui;
use tokio::sync::mpsc;

use crate::config::InputConfig;
use crate::state::{ClientCommand, SharedState};
use super::input::{classify_drag, keyboard_direction, restart_pressed};

const BOARD_COLOR: egui::Color32 = egui::Color32::WHITE;
const BORDER_COLOR: egui::Color32 = egui::Color32::BLACK;
const SNAKE_COLOR: egui::Color32 = egui::Color32::from_rgb(0x00, 0xC8, 0x00);
const HEAD_COLOR: egui::Color32 = egui::Color32::from_rgb(0x00, 0x80, 0x00);
const FOOD_COLOR: egui::Color32 = egui::Color32::RED;
const BORDER_WIDTH: f32 = 2.0;
const BUTTON_SIZE: [f32; 2] = [56.0, 56.0];

pub struct SnakeApp {
    shared_state: SharedState,
    command_tx: mpsc::UnboundedSender<ClientCommand>,
    input_config: InputConfig,
}

impl SnakeApp {
    pub fn new(
        shared_state: SharedState,
        command_tx: mpsc::UnboundedSender<ClientCommand>,
        input_config: InputConfig,
    ) -> Self {
        Self {
            shared_state,
            command_tx,
            input_config,
        }
    }

    // The game loop may already be gone during shutdown.
    fn send(&self, command: ClientCommand) {
        let _ = self.command_tx.send(command);
    }

    fn turn(&self, direction: Direction) {
        self.send(ClientCommand::Turn { direction });
    }

    fn render_game(&self, ui: &mut egui::Ui, ctx: &egui::Context, state: &SnakeGameState) {
        if self.input_config.keyboard_enabled {
            self.handle_keyboard(ctx, state);
        }

        self.render_board(ui, state);

        ui.add_space(8.0);
        ui.label(egui::RichText::new(format!("Score: {}", state.score)).size(20.0));

        ui.add_space(16.0);
        self.render_controls(ui);

        if let Some(reason) = state.death_reason {
            ui.add_space(16.0);
            ui.label(
                egui::RichText::new("Game Over!")
                    .color(egui::Color32::RED)
                    .size(24.0),
            );
            ui.label(format!("The snake {}.", reason));

            ui.add_space(8.0);
            if ui.button("Restart").clicked() {
                self.send(ClientCommand::Restart);
            }
        }
    }

    fn render_board(&self, ui: &mut egui::Ui, state: &SnakeGameState) {
        let side = GRID_SIZE as f32 * CELL_SIZE;
        let (response, painter) =
            ui.allocate_painter(egui::vec2(side, side), egui::Sense::drag());
        let rect = response.rect;

        painter.rect_filled(rect, 0.0, BOARD_COLOR);

        for (i, segment) in state.snake.iter().enumerate() {
            let color = if i == 0 { HEAD_COLOR } else { SNAKE_COLOR };
            painter.rect_filled(cell_rect(rect.min, *segment), 0.0, color);
        }
        painter.rect_filled(cell_rect(rect.min, state.food), 0.0, FOOD_COLOR);

        painter.rect_stroke(
            rect,
            0.0,
            egui::Stroke::new(BORDER_WIDTH, BORDER_COLOR),
            egui::StrokeKind::Outside,
        );

        if response.dragged()
            && let Some(direction) =
                classify_drag(response.drag_delta(), self.input_config.swipe_threshold)
        {
            self.turn(direction);
        }
    }

    fn render_controls(&self, ui: &mut egui::Ui) {
        let width = BUTTON_SIZE[0] * 3.0 + ui.spacing().item_spacing.x * 2.0;
        ui.allocate_ui(egui::vec2(width, BUTTON_SIZE[1] * 2.0 + 8.0), |ui| {
            ui.horizontal(|ui| {
                if ui.add_sized(BUTTON_SIZE, egui::Button::new("←")).clicked() {
                    self.turn(Direction::Left);
                }
                ui.vertical(|ui| {
                    if ui.add_sized(BUTTON_SIZE, egui::Button::new("↑")).clicked() {
                        self.turn(Direction::Up);
                    }
                    if ui.add_sized(BUTTON_SIZE, egui::Button::new("↓")).clicked() {
                        self.turn(Direction::Down);
                    }
                });
                if ui.add_sized(BUTTON_SIZE, egui::Button::new("→")).clicked() {
                    self.turn(Direction::Right);
                }
            });
        });
    }

    fn handle_keyboard(&self, ctx: &egui::Context, state: &SnakeGameState) {
        let (direction, restart) = ctx.input(|i| (keyboard_direction(i), restart_pressed(i)));

        if let Some(direction) = direction {
            self.turn(direction);
        }
        if restart && state.is_game_over() {
            self.send(ClientCommand::Restart);
        }
    }
}

fn cell_rect(origin: egui::Pos2, cell: Point) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(
            origin.x + cell.x as f32 * CELL_SIZE,
            origin.y + cell.y as f32 * CELL_SIZE,
        ),
        egui::vec2(CELL_SIZE, CELL_SIZE),
    )
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.shared_state.has_context() {
            self.shared_state.set_context(ctx.clone());
        }

        if ctx.input(|i| i.viewport().close_requested()) {
            self.send(ClientCommand::Shutdown);
        }

        let game_state = self.shared_state.get_game_state();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(16.0);
                match game_state {
                    Some(ref state) => self.render_game(ui, ctx, state),
                    None => {
                        ui.heading("Starting game...");
                        ui.spinner();
                    }
                }
            });
        });

        ctx.request_repaint_after(TICK_INTERVAL);
    }
}
