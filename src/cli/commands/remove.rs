//! Remove command implementation

use colored::Colorize;

use crate::app::services::routine_store::RoutineStore;
use crate::cli::args::RemoveArgs;
use crate::config::Config;
use crate::{Error, Result};

/// Remove command runner
pub fn run_remove(args: RemoveArgs, config: &Config) -> Result<()> {
    let store = RoutineStore::open(config);
    let saved = store
        .get(&args.id)?
        .ok_or_else(|| Error::routine_not_found(&args.id))?;

    store.delete(&args.id)?;
    println!("{} '{}'", "Removed".green().bold(), saved.name);

    Ok(())
}
