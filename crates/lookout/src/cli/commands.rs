//! CLI command definitions.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::zone::ZoneType;

/// Zone listing arguments.
#[derive(Debug, Args)]
pub struct ZonesCommand {
    /// Only list one tab
    #[arg(short, long, value_enum)]
    pub tab: Option<TabArg>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Replay command arguments.
#[derive(Debug, Args)]
pub struct ReplayCommand {
    /// JSON file holding an array of intents
    #[arg(value_name = "FILE")]
    pub script: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,

    /// Print the save/delete notices instead of raw events
    #[arg(short, long)]
    pub notices: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Zone tab argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TabArg {
    /// Safe zones
    Safe,
    /// Risk zones
    Risk,
}

impl From<TabArg> for ZoneType {
    fn from(arg: TabArg) -> Self {
        match arg {
            TabArg::Safe => Self::Safe,
            TabArg::Risk => Self::Risk,
        }
    }
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// JSON output
    Json,
}
