//! Command-line argument definitions for rutina
//!
//! Defines the complete CLI interface using the clap derive API.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::{Error, Result};

/// CLI arguments for the rutina routine sheet processor
///
/// Imports workout routine spreadsheets (Google Sheets CSV exports) into a
/// local store and tracks simple training stats over time.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "rutina",
    version,
    about = "Import workout routine sheets and track training stats",
    long_about = "Imports hand-edited workout routine spreadsheets exported from Google Sheets, \
                  groups them by training day, caches them locally for offline use, and tracks \
                  numeric training stats such as body weight over time."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress output except errors"
    )]
    pub quiet: bool,

    /// Data directory override
    ///
    /// Defaults to the platform data directory, e.g. ~/.local/share/rutina.
    #[arg(
        long = "data-dir",
        value_name = "PATH",
        global = true,
        help = "Directory holding the local stores"
    )]
    pub data_dir: Option<PathBuf>,
}

/// Available subcommands for rutina
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Import a routine sheet from a Google Sheets link or local CSV file
    Import(ImportArgs),
    /// Re-fetch a saved routine's sheet and refresh the cached copy
    Refresh(RefreshArgs),
    /// List saved routines
    List,
    /// Show a saved routine grouped by day
    Show(ShowArgs),
    /// Remove a saved routine
    Remove(RemoveArgs),
    /// Track numeric training stats
    Stats(StatsArgs),
}

/// Arguments for the import command
#[derive(Debug, Clone, Parser)]
pub struct ImportArgs {
    /// Google Sheets share link, or path to a local CSV export
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Display name for the imported routine
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    pub name: String,
}

/// Arguments for the refresh command
#[derive(Debug, Clone, Parser)]
pub struct RefreshArgs {
    /// Id of the saved routine to refresh
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Arguments for the show command
#[derive(Debug, Clone, Parser)]
pub struct ShowArgs {
    /// Id of the saved routine to show
    #[arg(value_name = "ID")]
    pub id: String,

    /// Show only this day's exercises
    #[arg(short = 'd', long = "day", value_name = "DAY")]
    pub day: Option<String>,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for the remove command
#[derive(Debug, Clone, Parser)]
pub struct RemoveArgs {
    /// Id of the saved routine to remove
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Arguments for the stats command group
#[derive(Debug, Clone, Parser)]
pub struct StatsArgs {
    #[command(subcommand)]
    pub command: StatsCommands,
}

/// Stat tracking subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum StatsCommands {
    /// Create a stat category with an initial value
    Add {
        /// Display name, e.g. "Peso corporal"
        #[arg(value_name = "NAME")]
        name: String,

        /// Unit the values are recorded in, e.g. "kg"
        #[arg(short = 'u', long = "unit", value_name = "UNIT")]
        unit: String,

        /// Initial value
        #[arg(long = "value", value_name = "VALUE")]
        value: f64,
    },
    /// Record a new value in a category
    Log {
        /// Category id
        #[arg(value_name = "ID")]
        id: String,

        /// Value to record
        #[arg(value_name = "VALUE")]
        value: f64,
    },
    /// List categories with their current values
    List,
    /// Show the full entry history of a category
    History {
        /// Category id
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Remove a category and its history
    Remove {
        /// Category id
        #[arg(value_name = "ID")]
        id: String,
    },
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl ImportArgs {
    /// Validate the import source for consistency
    ///
    /// A source that does not look like a URL must be an existing local file.
    pub fn validate(&self) -> Result<()> {
        if self.is_url() {
            return Ok(());
        }

        let path = PathBuf::from(&self.source);
        if !path.exists() {
            return Err(Error::configuration(format!(
                "Source file does not exist: {}",
                path.display()
            )));
        }
        if !path.is_file() {
            return Err(Error::configuration(format!(
                "Source is not a file: {}",
                path.display()
            )));
        }
        Ok(())
    }

    /// True when the source is a web link rather than a local file
    pub fn is_url(&self) -> bool {
        self.source.starts_with("http://") || self.source.starts_with("https://")
    }
}
