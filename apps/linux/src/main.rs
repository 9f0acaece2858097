//! PassField Linux App
//!
//! A desktop demo for the PassField password input, built with the Iced GUI
//! framework. It hosts the component in a sign in form and wires it to the
//! app's configuration and logging.

use anyhow::Result;
use clap::{builder::PossibleValuesParser, Parser};
use iced::{Element, Size, Task, Theme};
use std::path::PathBuf;
use tracing::{debug, info};

use passfield_linux::config::{self, ConfigManager};
use passfield_shared::LOG_LEVELS;
use passfield_linux::logging::{self, LoggingConfig};
use passfield_linux::ui::views::{SignInMessage, SignInView};
use passfield_linux::ui::{create_theme, utils};

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "passfield", version, about = "Password input with a visibility toggle")]
struct Args {
    /// Path to the configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Console log level, overriding the configuration file
    #[arg(long, value_parser = PossibleValuesParser::new(LOG_LEVELS.iter().copied()))]
    log_level: Option<String>,

    /// Verbose development logging
    #[arg(short, long)]
    verbose: bool,

    /// Also write daily log files
    #[arg(long)]
    log_file: bool,

    /// Write the default configuration file and exit
    #[arg(long)]
    init_config: bool,
}

/// Main application messages
#[derive(Debug, Clone)]
enum Message {
    SignIn(SignInMessage),
}

/// Main application structure
struct PassFieldApp {
    sign_in: SignInView,
    theme: Theme,
}

impl PassFieldApp {
    fn new(config: &config::AppConfig) -> Self {
        info!("Initializing PassField app");
        Self {
            sign_in: SignInView::new(config.ui.toggle_tooltips),
            theme: create_theme(&config.ui.theme),
        }
    }

    fn title(&self) -> String {
        "PassField".to_string()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SignIn(message) => self.sign_in.update(message).map(Message::SignIn),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        self.sign_in.view().map(Message::SignIn)
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }
}

fn logging_config(args: &Args, config: &config::AppConfig) -> LoggingConfig {
    let mut logging = if args.verbose {
        LoggingConfig::development()
    } else {
        LoggingConfig::from_settings(&config.logging)
    };

    if let Some(level) = &args.log_level {
        logging = logging.console_level(level);
    }
    if args.log_file {
        logging = logging.with_file_logging();
    }

    logging
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config_manager = ConfigManager::new(args.config.clone());

    if args.init_config {
        config_manager.save()?;
        println!(
            "Wrote default configuration to {}",
            config_manager.config_path().display()
        );
        return Ok(());
    }

    config_manager.load()?;
    let app_config = config_manager.config().clone();

    logging::initialize_logging(logging_config(&args, &app_config))?;
    info!("Starting PassField Linux app v{}", passfield_shared::VERSION);
    debug!("Configuration: {:?}", app_config);

    utils::typography::init_font_size(app_config.ui.font_size);

    let window_size = Size::new(
        app_config.ui.window_width.unwrap_or(480) as f32,
        app_config.ui.window_height.unwrap_or(360) as f32,
    );

    iced::application(PassFieldApp::title, PassFieldApp::update, PassFieldApp::view)
        .theme(PassFieldApp::theme)
        .window_size(window_size)
        .centered()
        .run_with(move || (PassFieldApp::new(&app_config), Task::none()))
        .map_err(|e| anyhow::anyhow!("PassField window exited with an error: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from([
            "passfield",
            "--config",
            "/tmp/passfield.yml",
            "--log-level",
            "trace",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/passfield.yml")));
        assert_eq!(args.log_level.as_deref(), Some("trace"));
        assert!(!args.verbose);
    }

    #[test]
    fn test_log_level_flag_overrides_config() {
        let args = Args::parse_from(["passfield", "--log-level", "warn"]);
        let logging = logging_config(&args, &config::AppConfig::default());
        assert_eq!(logging.console_level, "warn");
    }

    #[test]
    fn test_unknown_log_level_flag_is_rejected() {
        assert!(Args::try_parse_from(["passfield", "--log-level", "loud"]).is_err());
        assert!(Args::try_parse_from(["passfield", "--log-level", "debug"]).is_ok());
    }

    #[test]
    fn test_verbose_uses_development_logging() {
        let args = Args::parse_from(["passfield", "-v"]);
        let logging = logging_config(&args, &config::AppConfig::default());
        assert_eq!(logging.console_level, "debug");
    }

    #[test]
    fn test_app_title() {
        let app = PassFieldApp::new(&config::AppConfig::default());
        assert_eq!(app.title(), "PassField");
    }
}
