//! Command implementations for the rutina CLI
//!
//! Each subcommand is implemented in its own module; this module wires up
//! logging, configuration, and dispatch.

pub mod import;
pub mod list;
pub mod refresh;
pub mod remove;
pub mod shared;
pub mod show;
pub mod stats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for rutina
///
/// Sets up logging, builds the effective configuration from global flags,
/// and dispatches to the subcommand handler.
pub async fn run(args: Args) -> Result<()> {
    shared::setup_logging(&args)?;
    let config = shared::build_config(&args);

    match args.get_command() {
        Commands::Import(import_args) => import::run_import(import_args, &config).await,
        Commands::Refresh(refresh_args) => refresh::run_refresh(refresh_args, &config).await,
        Commands::List => list::run_list(&config),
        Commands::Show(show_args) => show::run_show(show_args, &config),
        Commands::Remove(remove_args) => remove::run_remove(remove_args, &config),
        Commands::Stats(stats_args) => stats::run_stats(stats_args, &config),
    }
}
