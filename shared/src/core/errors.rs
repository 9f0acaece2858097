//! Error types for the PassField shared library.
//!
//! The password field itself cannot fail. Errors only arise in the ambient
//! configuration layer used by host applications.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or saving application configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file exists but could not be read
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file could not be written
    #[error("Failed to write config file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for [`crate::config::AppConfig`]
    #[error("Failed to parse config YAML: {message}")]
    Parse { message: String },

    /// The configuration could not be serialized
    #[error("Failed to serialize config: {message}")]
    Serialize { message: String },

    /// A value parsed correctly but is out of range
    #[error("Invalid config value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
