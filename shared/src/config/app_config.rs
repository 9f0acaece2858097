//! Application configuration for PassField hosts
//!
//! These structures hold the settings for the desktop shell that hosts the
//! password field: theme, font size, tooltip behaviour and logging. None of
//! them touches the visibility flag, which always starts masked.

use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, ConfigResult};

/// Accepted values for [`UiConfig::theme`]
pub const THEMES: &[&str] = &["system", "light", "dark"];

/// Accepted values for [`LoggingSettings::level`]
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Accepted values for [`LoggingSettings::format`]
pub const LOG_FORMATS: &[&str] = &["compact", "pretty", "full"];

/// Main application configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// User interface configuration
    pub ui: UiConfig,

    /// Logging configuration
    pub logging: LoggingSettings,
}

/// User interface configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// UI theme preference ("system", "light", "dark")
    pub theme: String,

    /// Base font size in points
    pub font_size: f32,

    /// Whether the visibility toggle shows its accessible label as a tooltip
    pub toggle_tooltips: bool,

    /// Window width
    pub window_width: Option<u32>,

    /// Window height
    pub window_height: Option<u32>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Minimum level ("error", "warn", "info", "debug", "trace")
    pub level: String,

    /// Output format ("compact", "pretty", "full")
    pub format: String,

    /// Whether to include thread IDs in log lines
    pub thread_ids: bool,

    /// Whether to include source file and line in log lines
    pub source_location: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "system".to_string(),
            font_size: 14.0,
            toggle_tooltips: true,
            window_width: Some(480),
            window_height: Some(360),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "compact".to_string(),
            thread_ids: false,
            source_location: false,
        }
    }
}

impl AppConfig {
    /// Check values that parse correctly but make no sense
    pub fn validate(&self) -> ConfigResult<()> {
        if !THEMES.contains(&self.ui.theme.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "ui.theme".to_string(),
                message: format!("expected one of {THEMES:?}, got '{}'", self.ui.theme),
            });
        }

        if !(8.0..=32.0).contains(&self.ui.font_size) {
            return Err(ConfigError::InvalidValue {
                field: "ui.font_size".to_string(),
                message: format!("must be between 8 and 32, got {}", self.ui.font_size),
            });
        }

        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.level".to_string(),
                message: format!(
                    "expected one of {LOG_LEVELS:?}, got '{}'",
                    self.logging.level
                ),
            });
        }

        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.format".to_string(),
                message: format!(
                    "expected one of {LOG_FORMATS:?}, got '{}'",
                    self.logging.format
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_default_app_config() {
        let config = AppConfig::default();

        assert_eq!(config.ui.theme, "system");
        assert_eq!(config.ui.font_size, 14.0);
        assert!(config.ui.toggle_tooltips);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "compact");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = "ui:\n  theme: dark\n";
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.ui.theme, "dark");
        assert_eq!(config.ui.font_size, 14.0);
        assert_eq!(config.logging, LoggingSettings::default());
    }

    #[test]
    fn test_validate_rejects_unknown_theme() {
        let mut config = AppConfig::default();
        config.ui.theme = "neon".to_string();

        assert_matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "ui.theme"
        );
    }

    #[test]
    fn test_validate_rejects_font_size_out_of_range() {
        let mut config = AppConfig::default();
        config.ui.font_size = 64.0;

        assert_matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "ui.font_size"
        );
    }

    #[test]
    fn test_validate_rejects_unknown_log_format() {
        let mut config = AppConfig::default();
        config.logging.format = "xml".to_string();

        assert_matches!(config.validate(), Err(ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_validate_log_level() {
        let mut config = AppConfig::default();
        config.logging.level = "loud".to_string();
        assert_matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "logging.level"
        );

        config.logging.level = "WARN".to_string();
        assert!(config.validate().is_ok());
    }
}
