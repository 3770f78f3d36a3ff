use common::config::Validate;
use serde::{Deserialize, Serialize};

use super::{
    ConfigManager, FileContentConfigProvider, InputConfig, WindowConfig, YamlConfigSerializer,
};

pub const DEFAULT_CONFIG_FILE: &str = "snake_client_config.yaml";

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub window: WindowConfig,
    pub input: InputConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.window.validate()?;
        self.input.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_snake_client_config_{}.yaml", random_number));
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_with_manager() {
        let config = Config {
            input: InputConfig {
                swipe_threshold: 12.5,
                keyboard_enabled: false,
            },
            ..Config::default()
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(&file_path);

        assert!(manager.set_config(&config).is_ok());
        assert_eq!(manager.get_config().unwrap(), config);

        let fresh_manager = get_config_manager(&file_path);
        assert_eq!(fresh_manager.get_config().unwrap(), config);

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let manager = get_config_manager("this_file_does_not_exist.yaml");
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r#"
            window:
              width: 100.0
              height: 900.0
            input:
              swipe_threshold: 4.0
              keyboard_enabled: true
        "#;

        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider
            .set_config_content(invalid_config_content)
            .unwrap();

        let manager = get_config_manager(&file_path);
        let error = manager.get_config().unwrap_err();
        assert!(error.contains("window width"), "unexpected error: {}", error);

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_malformed_config_cant_be_read() {
        let file_path = get_temp_file_path();
        FileContentConfigProvider::new(file_path.clone())
            .set_config_content("window: [not, a, map]")
            .unwrap();

        let manager = get_config_manager(&file_path);
        assert!(manager.get_config().is_err());

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_invalid_config_cant_be_saved() {
        let config = Config {
            input: InputConfig {
                swipe_threshold: -1.0,
                keyboard_enabled: true,
            },
            ..Config::default()
        };
        let manager = get_config_manager(&get_temp_file_path());
        assert!(manager.set_config(&config).is_err());
    }
}
