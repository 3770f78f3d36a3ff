use common::config::{Validate, check_range};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<(), String> {
        check_range("window width", self.width, 400.0, 2000.0)?;
        check_range("window height", self.height, 400.0, 2000.0)?;
        Ok(())
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 700.0,
            height: 900.0,
        }
    }
}
