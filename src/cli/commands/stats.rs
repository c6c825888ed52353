//! Stats command group implementation
//!
//! Creates, lists, and appends to numeric stat categories: body weight,
//! working weights, whatever the user cares to log over time.

use colored::Colorize;

use crate::app::services::stat_tracker::StatTracker;
use crate::cli::args::{StatsArgs, StatsCommands};
use crate::config::Config;
use crate::{Error, Result};

/// Stats command runner
pub fn run_stats(args: StatsArgs, config: &Config) -> Result<()> {
    let tracker = StatTracker::open(config);

    match args.command {
        StatsCommands::Add { name, unit, value } => {
            let category = tracker.create_category(&name, &unit, value)?;
            println!(
                "{} '{}' at {} {}",
                "Created".green().bold(),
                category.name,
                value,
                category.unit
            );
            println!("Id: {}", category.id.bold());
        }
        StatsCommands::Log { id, value } => {
            let entry = tracker.log_entry(&id, value)?;
            let category = tracker
                .get(&id)?
                .ok_or_else(|| Error::category_not_found(&id))?;
            println!(
                "{} {} {} in '{}'",
                "Logged".green().bold(),
                entry.value,
                category.unit,
                category.name
            );
        }
        StatsCommands::List => {
            let categories = tracker.get_all()?;
            if categories.is_empty() {
                println!("No stat categories. Create one with: rutina stats add <NAME> --unit <UNIT> --value <VALUE>");
                return Ok(());
            }
            for category in categories {
                let current = match category.latest() {
                    Some(entry) => format!("{} {}", entry.value, category.unit),
                    None => "no entries".to_string(),
                };
                println!(
                    "{}  {}: {} ({} entries)",
                    category.id.bold(),
                    category.name.cyan(),
                    current,
                    category.entries.len()
                );
            }
        }
        StatsCommands::History { id } => {
            let category = tracker
                .get(&id)?
                .ok_or_else(|| Error::category_not_found(&id))?;
            println!("{} ({})", category.name.bold(), category.unit);
            for entry in &category.entries {
                println!(
                    "  {}  {}",
                    entry.date.format("%Y-%m-%d %H:%M"),
                    entry.value
                );
            }
        }
        StatsCommands::Remove { id } => {
            let category = tracker
                .get(&id)?
                .ok_or_else(|| Error::category_not_found(&id))?;
            tracker.delete(&id)?;
            println!("{} '{}'", "Removed".green().bold(), category.name);
        }
    }

    Ok(())
}
