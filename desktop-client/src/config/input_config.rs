use common::config::{Validate, check_range};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct InputConfig {
    /// Minimum drag distance in one frame before it is read as a swipe.
    pub swipe_threshold: f32,
    pub keyboard_enabled: bool,
}

impl Validate for InputConfig {
    fn validate(&self) -> Result<(), String> {
        check_range("swipe_threshold", self.swipe_threshold, 0.0, 100.0)
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: 4.0,
            keyboard_enabled: true,
        }
    }
}
