//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for kmlquery using clap's derive macros.

use clap::{Args, Parser, Subcommand};

/// kmlquery - request KML overlays from a GSKY-style CGI endpoint
#[derive(Parser)]
#[command(name = "kmlquery")]
#[command(version)]
#[command(about = "Request KML overlays from a CGI endpoint", long_about = None)]
pub struct Cli {
    /// Configuration file (default: kmlquery.toml, optional)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Send the request and write the rendered KML
    Fetch {
        #[command(flatten)]
        request: RequestArgs,

        /// Output file (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<String>,
    },

    /// Print the request URL without sending it
    Url {
        #[command(flatten)]
        request: RequestArgs,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Request inputs shared by `fetch` and `url`
///
/// Values from `--form` are loaded first; individual flags override them.
#[derive(Args, Debug, Clone, Default)]
pub struct RequestArgs {
    /// Form file with the seven fields (TOML or JSON, by extension)
    #[arg(long)]
    pub form: Option<String>,

    /// Request kind code (1 = KML)
    #[arg(long, default_value_t = 1)]
    pub kind: u32,

    /// Override endpoint.base_url
    #[arg(long)]
    pub base_url: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub layer: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub region: Option<String>,

    /// Western bound
    #[arg(long, allow_hyphen_values = true)]
    pub west: Option<String>,

    /// Southern bound
    #[arg(long, allow_hyphen_values = true)]
    pub south: Option<String>,

    /// Eastern bound
    #[arg(long, allow_hyphen_values = true)]
    pub east: Option<String>,

    /// Northern bound
    #[arg(long, allow_hyphen_values = true)]
    pub north: Option<String>,

    /// Timestamp, passed through verbatim
    #[arg(long, allow_hyphen_values = true)]
    pub time: Option<String>,
}

/// Configuration management commands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: kmlquery.example.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration as TOML
    Show,
}
