//! CLI interface module
//!
//! This module provides command-line interface functionality for kmlquery.

pub mod commands;

use std::fmt;

use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;

use crate::cli::{Cli, Commands, ConfigCommands};
use crate::config::{StaticConfig, update_config};
use crate::errors::KmlQueryError;
use crate::system::logging::init_logging;
use commands::{config_generate, config_show, fetch, print_url};

#[derive(Debug)]
pub enum CliError {
    ConfigError(String),
    ParseError(String),
    CommandError(String),
    RequestError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::ConfigError(msg) => format!("Config error: {}", msg),
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
            CliError::RequestError(msg) => format!("Request error: {}", msg),
        }
    }

    /// Format as colored output
    #[cfg(feature = "cli")]
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::ConfigError(msg) => {
                format!("{} {}", "Config error:".red().bold(), msg.white())
            }
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
            CliError::RequestError(msg) => {
                format!("{} {}", "Request error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<KmlQueryError> for CliError {
    fn from(err: KmlQueryError) -> Self {
        match err {
            KmlQueryError::Config(_) => CliError::ConfigError(err.message().to_string()),
            KmlQueryError::Validation(_) => CliError::ParseError(err.message().to_string()),
            KmlQueryError::FileOperation(_) | KmlQueryError::Serialization(_) => {
                CliError::CommandError(err.to_string())
            }
            _ => CliError::RequestError(err.to_string()),
        }
    }
}

/// Run a parsed command line
///
/// `config generate` runs before any configuration is loaded so a broken
/// config file can still be replaced.
pub async fn run_cli(cli: Cli) -> Result<(), CliError> {
    let Cli {
        config: config_path,
        command,
    } = cli;

    match command {
        Commands::Config {
            action: ConfigCommands::Generate { output_path, force },
        } => config_generate(output_path, force),
        Commands::Config {
            action: ConfigCommands::Show,
        } => {
            let (config, _guard) = prepare(config_path.as_deref())?;
            config_show(&config)
        }
        Commands::Fetch { request, output } => {
            let (config, _guard) = prepare(config_path.as_deref())?;
            fetch(&config, request, output).await
        }
        Commands::Url { request } => {
            let (config, _guard) = prepare(config_path.as_deref())?;
            print_url(&config, request)
        }
    }
}

/// Load configuration, start logging and publish the config globally
///
/// The returned guard must outlive the command so buffered logs are flushed.
fn prepare(config_path: Option<&str>) -> Result<(StaticConfig, WorkerGuard), CliError> {
    let config = StaticConfig::load_from(config_path)?;
    let guard = init_logging(&config.logging)?;
    debug!("Configuration: {:?}", config);
    update_config(config.clone());
    Ok((config, guard))
}
