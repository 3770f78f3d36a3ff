mod input_config;
mod main_config;
mod window_config;

pub(crate) use common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};

pub use input_config::InputConfig;
pub use main_config::{Config, DEFAULT_CONFIG_FILE, get_config_manager};
pub use window_config::WindowConfig;
