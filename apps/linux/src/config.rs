//! Configuration management for the PassField Linux app
//!
//! This module provides a thin wrapper around the shared configuration
//! manager, converting its errors to `anyhow` with file context.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

pub use passfield_shared::AppConfig;
use passfield_shared::ConfigManager as SharedConfigManager;

/// Linux-specific configuration manager
pub struct ConfigManager {
    shared_manager: SharedConfigManager,
}

impl ConfigManager {
    /// Create a configuration manager for `path`, or the default location
    pub fn new(path: Option<PathBuf>) -> Self {
        let shared_manager = match path {
            Some(path) => SharedConfigManager::new(path),
            None => SharedConfigManager::with_default_path(),
        };

        debug!("Config file path: {:?}", shared_manager.config_path());
        Self { shared_manager }
    }

    /// Load configuration from file, falling back to defaults if it is missing
    pub fn load(&mut self) -> Result<()> {
        self.shared_manager.load().with_context(|| {
            format!(
                "Failed to load config from {:?}",
                self.shared_manager.config_path()
            )
        })
    }

    /// Save the current configuration to disk
    pub fn save(&self) -> Result<()> {
        self.shared_manager.save().with_context(|| {
            format!(
                "Failed to save config to {:?}",
                self.shared_manager.config_path()
            )
        })
    }

    /// Get the current configuration
    pub fn config(&self) -> &AppConfig {
        self.shared_manager.config()
    }

    pub fn config_path(&self) -> &Path {
        self.shared_manager.config_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let mut manager = ConfigManager::new(Some(temp_dir.path().join("config.yml")));

        manager.load().unwrap();
        assert_eq!(manager.config(), &AppConfig::default());
    }

    #[test]
    fn test_load_error_mentions_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yml");
        std::fs::write(&path, "ui: [").unwrap();

        let mut manager = ConfigManager::new(Some(path));
        let error = manager.load().unwrap_err();
        assert!(format!("{error:#}").contains("config.yml"));
    }
}
