use common::games::snake::Direction;
use eframe::egui;

/// Reads a drag by its dominant axis; ties go to the vertical axis.
pub fn classify_drag(delta: egui::Vec2, threshold: f32) -> Option<Direction> {
    if delta.length() < threshold || delta == egui::Vec2::ZERO {
        return None;
    }

    if delta.x.abs() > delta.y.abs() {
        if delta.x > 0.0 {
            Some(Direction::Right)
        } else {
            Some(Direction::Left)
        }
    } else if delta.y > 0.0 {
        Some(Direction::Down)
    } else {
        Some(Direction::Up)
    }
}

pub fn keyboard_direction(input: &egui::InputState) -> Option<Direction> {
    if input.key_pressed(egui::Key::ArrowUp) || input.key_pressed(egui::Key::W) {
        Some(Direction::Up)
    } else if input.key_pressed(egui::Key::ArrowDown) || input.key_pressed(egui::Key::S) {
        Some(Direction::Down)
    } else if input.key_pressed(egui::Key::ArrowLeft) || input.key_pressed(egui::Key::A) {
        Some(Direction::Left)
    } else if input.key_pressed(egui::Key::ArrowRight) || input.key_pressed(egui::Key::D) {
        Some(Direction::Right)
    } else {
        None
    }
}

pub fn restart_pressed(input: &egui::InputState) -> bool {
    input.key_pressed(egui::Key::R) || input.key_pressed(egui::Key::Enter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_drags() {
        assert_eq!(classify_drag(egui::vec2(10.0, 3.0), 4.0), Some(Direction::Right));
        assert_eq!(classify_drag(egui::vec2(-10.0, -3.0), 4.0), Some(Direction::Left));
    }

    #[test]
    fn test_vertical_drags() {
        assert_eq!(classify_drag(egui::vec2(2.0, 9.0), 4.0), Some(Direction::Down));
        assert_eq!(classify_drag(egui::vec2(-2.0, -9.0), 4.0), Some(Direction::Up));
    }

    #[test]
    fn test_diagonal_tie_goes_vertical() {
        assert_eq!(classify_drag(egui::vec2(5.0, 5.0), 1.0), Some(Direction::Down));
        assert_eq!(classify_drag(egui::vec2(5.0, -5.0), 1.0), Some(Direction::Up));
    }

    #[test]
    fn test_short_drags_are_ignored() {
        assert_eq!(classify_drag(egui::vec2(1.0, 1.0), 4.0), None);
        assert_eq!(classify_drag(egui::Vec2::ZERO, 0.0), None);
    }
}
