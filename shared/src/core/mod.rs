//! Core types for PassField
//!
//! Toolkit-independent state for the password field and the error types of
//! the shared library.

pub mod errors;
pub mod visibility;

pub use errors::{ConfigError, ConfigResult};
pub use visibility::{
    MaskingMode, ToggleIcon, VisibilityState, HIDE_PASSWORD_LABEL, SHOW_PASSWORD_LABEL,
};
