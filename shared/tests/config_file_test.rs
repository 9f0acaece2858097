//! Configuration File Integration Test
//!
//! Exercises ConfigManager against real files in a temporary directory.

use assert_matches::assert_matches;
use passfield_shared::{AppConfig, ConfigError, ConfigManager};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let mut manager = ConfigManager::new(temp_dir.path().join("config.yml"));

    manager.load().unwrap();

    assert!(manager.is_loaded());
    assert_eq!(manager.config(), &AppConfig::default());
}

#[test]
fn test_save_then_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("config.yml");

    let mut manager = ConfigManager::new(&path);
    manager.config_mut().ui.theme = "dark".to_string();
    manager.config_mut().ui.toggle_tooltips = false;
    manager.config_mut().logging.level = "debug".to_string();
    manager.save().unwrap();
    assert!(path.exists());

    let mut reloaded = ConfigManager::new(&path);
    reloaded.load().unwrap();
    assert_eq!(reloaded.config().ui.theme, "dark");
    assert!(!reloaded.config().ui.toggle_tooltips);
    assert_eq!(reloaded.config().logging.level, "debug");
}

#[test]
fn test_malformed_yaml_is_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yml");
    fs::write(&path, "ui: [this is: not a mapping").unwrap();

    let mut manager = ConfigManager::new(&path);
    assert_matches!(manager.load(), Err(ConfigError::Parse { .. }));
    assert!(!manager.is_loaded());
}

#[test]
fn test_invalid_value_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yml");
    fs::write(&path, "ui:\n  theme: sepia\n").unwrap();

    let mut manager = ConfigManager::new(&path);
    assert_matches!(manager.load(), Err(ConfigError::InvalidValue { .. }));
}

#[test]
fn test_unknown_log_level_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yml");
    fs::write(&path, "logging:\n  level: loud\n").unwrap();

    let mut manager = ConfigManager::new(&path);
    assert_matches!(
        manager.load(),
        Err(ConfigError::InvalidValue { field, .. }) if field == "logging.level"
    );
    assert!(!manager.is_loaded());
}

#[test]
fn test_directory_in_place_of_file_is_read_error() {
    let temp_dir = TempDir::new().unwrap();

    let mut manager = ConfigManager::new(temp_dir.path());
    assert_matches!(manager.load(), Err(ConfigError::Read { .. }));
}
