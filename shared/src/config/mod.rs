//! Configuration management for PassField hosts
//!
//! Loads and saves the YAML configuration file used by desktop shells that
//! embed the password field. A missing file is not an error: the defaults
//! are used instead.

pub mod app_config;

pub use app_config::*;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::core::{ConfigError, ConfigResult};

/// Configuration manager for desktop applications
///
/// Handles loading, saving, and managing the application configuration file.
#[derive(Debug)]
pub struct ConfigManager {
    config_path: PathBuf,
    app_config: AppConfig,
    loaded: bool,
}

impl ConfigManager {
    /// Create a new configuration manager
    ///
    /// # Arguments
    /// * `config_path` - Path to the configuration file
    pub fn new<P: Into<PathBuf>>(config_path: P) -> Self {
        Self {
            config_path: config_path.into(),
            app_config: AppConfig::default(),
            loaded: false,
        }
    }

    /// Create a manager for the platform default configuration path
    pub fn with_default_path() -> Self {
        Self::new(Self::default_config_path())
    }

    /// `<config dir>/passfield/config.yml`
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_default().join(".config"))
            .join("passfield")
            .join("config.yml")
    }

    /// Load configuration from file
    ///
    /// If the configuration file doesn't exist, uses default configuration.
    /// This method is safe to call multiple times.
    pub fn load(&mut self) -> ConfigResult<()> {
        match fs::read_to_string(&self.config_path) {
            Ok(contents) => {
                let config: AppConfig =
                    serde_yaml::from_str(&contents).map_err(|e| ConfigError::Parse {
                        message: e.to_string(),
                    })?;
                config.validate()?;

                debug!("Loaded configuration from {:?}", self.config_path);
                self.app_config = config;
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(
                    "No config file at {:?}, using defaults",
                    self.config_path
                );
                self.app_config = AppConfig::default();
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: self.config_path.clone(),
                    source,
                })
            }
        }

        self.loaded = true;
        Ok(())
    }

    /// Save the current configuration, creating parent directories as needed
    pub fn save(&self) -> ConfigResult<()> {
        let yaml = serde_yaml::to_string(&self.app_config).map_err(|e| {
            ConfigError::Serialize {
                message: e.to_string(),
            }
        })?;

        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(&self.config_path, yaml).map_err(|source| ConfigError::Write {
            path: self.config_path.clone(),
            source,
        })?;

        debug!("Saved configuration to {:?}", self.config_path);
        Ok(())
    }

    /// Get immutable reference to configuration
    pub fn config(&self) -> &AppConfig {
        &self.app_config
    }

    /// Get mutable reference to configuration
    pub fn config_mut(&mut self) -> &mut AppConfig {
        &mut self.app_config
    }

    /// Check if configuration has been loaded
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }
}
