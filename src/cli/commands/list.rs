//! List command implementation

use colored::Colorize;

use crate::Result;
use crate::app::services::routine_store::RoutineStore;
use crate::config::Config;

/// List command runner
pub fn run_list(config: &Config) -> Result<()> {
    let store = RoutineStore::open(config);
    let routines = store.get_all()?;

    if routines.is_empty() {
        println!("No saved routines. Import one with: rutina import <URL> --name <NAME>");
        return Ok(());
    }

    for routine in routines {
        let summary = match &routine.last_known_data {
            Some(data) => format!(
                "{} days, {} exercises",
                data.day_count(),
                data.exercise_count()
            ),
            None => "no cached data".to_string(),
        };

        println!(
            "{}  {} ({}), imported {}",
            routine.id.bold(),
            routine.name.cyan(),
            summary,
            routine.imported_at.format("%Y-%m-%d")
        );
    }

    Ok(())
}
