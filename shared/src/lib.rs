//! PassField Shared Library
//!
//! This crate contains the toolkit-independent parts of the PassField password
//! input: the visibility state machine, the pass-through field configuration,
//! style class merging, and configuration for host applications.
//!
//! # Usage
//!
//! ```rust
//! use passfield_shared::{FieldConfig, InputMode, VisibilityState};
//!
//! let mut state = VisibilityState::new();
//! let config = FieldConfig::new().placeholder("Password").class("pr-4");
//!
//! assert_eq!(config.for_password(&state).mode, InputMode::Password);
//! assert_eq!(state.toggle_label(), "Show password");
//!
//! state.toggle();
//! assert_eq!(config.for_password(&state).mode, InputMode::Text);
//! assert_eq!(state.toggle_label(), "Hide password");
//! ```

pub mod config;
pub mod core;
pub mod models;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::{
    ConfigError, ConfigResult, MaskingMode, ToggleIcon, VisibilityState, HIDE_PASSWORD_LABEL,
    SHOW_PASSWORD_LABEL,
};

pub use config::{AppConfig, ConfigManager, LoggingSettings, UiConfig, LOG_LEVELS};

pub use models::{FieldConfig, FieldSize, InputMode, PASSWORD_FIELD_CLASSES};

pub use utils::{merge_classes, ClassList};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
