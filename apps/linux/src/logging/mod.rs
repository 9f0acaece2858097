//! Logging configuration for the PassField Linux application
//!
//! Structured logging through `tracing-subscriber`: a console layer that is
//! always present and an optional daily-rotated file layer. `RUST_LOG`
//! overrides the configured console level when set.

use anyhow::{Context, Result};
use passfield_shared::LoggingSettings;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Console output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Full,
}

impl LogFormat {
    /// Parse a format name, falling back to compact
    pub fn parse(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "pretty" => LogFormat::Pretty,
            "full" => LogFormat::Full,
            _ => LogFormat::Compact,
        }
    }
}

/// Logging configuration for the application
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level for console output
    pub console_level: String,
    /// Console output format
    pub format: LogFormat,
    /// Directory for daily log files; file logging is off when `None`
    pub log_dir: Option<PathBuf>,
    /// Log level for file output
    pub file_level: String,
    /// Whether to include thread IDs in logs
    pub include_thread_ids: bool,
    /// Whether to include source code locations in logs
    pub include_source_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            console_level: "info".to_string(),
            format: LogFormat::Compact,
            log_dir: None,
            file_level: "debug".to_string(),
            include_thread_ids: false,
            include_source_location: false,
        }
    }
}

impl LoggingConfig {
    /// Build from the `logging` section of the app config
    pub fn from_settings(settings: &LoggingSettings) -> Self {
        Self {
            console_level: settings.level.clone(),
            format: LogFormat::parse(&settings.format),
            include_thread_ids: settings.thread_ids,
            include_source_location: settings.source_location,
            ..Default::default()
        }
    }

    /// Set console log level
    pub fn console_level(mut self, level: &str) -> Self {
        self.console_level = level.to_string();
        self
    }

    /// Enable daily log files in the default data directory
    pub fn with_file_logging(mut self) -> Self {
        self.log_dir = Some(default_log_dir());
        self
    }

    /// Create development configuration with more verbose logging
    pub fn development() -> Self {
        Self {
            console_level: "debug".to_string(),
            format: LogFormat::Pretty,
            include_thread_ids: true,
            include_source_location: true,
            ..Default::default()
        }
    }

    /// Filter directive for the console layer
    fn console_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.console_level))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// `<data dir>/passfield/logs`
pub fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_default().join(".local/share"))
        .join("passfield")
        .join("logs")
}

/// Initialize logging with the given configuration
pub fn initialize_logging(config: LoggingConfig) -> Result<()> {
    let mut layers = Vec::new();

    let ansi = atty::is(atty::Stream::Stdout);
    let console_layer = match config.format {
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .with_thread_ids(config.include_thread_ids)
            .with_file(config.include_source_location)
            .with_line_number(config.include_source_location)
            .with_ansi(ansi)
            .with_filter(config.console_filter())
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_thread_ids(config.include_thread_ids)
            .with_file(config.include_source_location)
            .with_line_number(config.include_source_location)
            .with_ansi(ansi)
            .with_filter(config.console_filter())
            .boxed(),
        LogFormat::Full => fmt::layer()
            .with_target(true)
            .with_thread_ids(config.include_thread_ids)
            .with_file(config.include_source_location)
            .with_line_number(config.include_source_location)
            .with_ansi(ansi)
            .with_filter(config.console_filter())
            .boxed(),
    };
    layers.push(console_layer);

    if let Some(log_dir) = &config.log_dir {
        fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;

        let file_filter =
            EnvFilter::try_new(&config.file_level).unwrap_or_else(|_| EnvFilter::new("debug"));
        let file_appender = tracing_appender::rolling::daily(log_dir, "passfield");

        let file_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(config.include_thread_ids)
            .with_ansi(false)
            .with_writer(file_appender)
            .with_filter(file_filter)
            .boxed();
        layers.push(file_layer);
    }

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    info!(
        "PassField logging initialized (console level: {}, format: {:?})",
        config.console_level, config.format
    );
    if let Some(log_dir) = &config.log_dir {
        info!("File logging enabled in {:?}", log_dir);
    }

    Ok(())
}
