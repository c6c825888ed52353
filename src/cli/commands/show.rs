//! Show command implementation
//!
//! Prints a saved routine from the local cache, grouped by day, optionally
//! filtered to a single day, in human or JSON format.

use colored::Colorize;

use super::shared::render_routine;
use crate::app::services::routine_store::RoutineStore;
use crate::cli::args::{OutputFormat, ShowArgs};
use crate::config::Config;
use crate::{Error, Result};

/// Show command runner
pub fn run_show(args: ShowArgs, config: &Config) -> Result<()> {
    let store = RoutineStore::open(config);
    let saved = store
        .get(&args.id)?
        .ok_or_else(|| Error::routine_not_found(&args.id))?;

    let Some(routine) = &saved.last_known_data else {
        println!(
            "{} '{}' has no cached data yet. Run: rutina refresh {}",
            "Note:".yellow(),
            saved.name,
            saved.id
        );
        return Ok(());
    };

    match &args.day {
        Some(day) => {
            let exercises = routine.get(day).ok_or_else(|| {
                Error::configuration(format!(
                    "No day '{}' in routine '{}'. Available days: {}",
                    day,
                    saved.name,
                    routine.days().collect::<Vec<_>>().join(", ")
                ))
            })?;

            match args.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(exercises)?);
                }
                OutputFormat::Human => {
                    println!("{} ({})", saved.name.bold(), day.cyan());
                    for exercise in exercises {
                        println!(
                            "  {}  {} x {}  descanso {}",
                            exercise.exercise.bold(),
                            exercise.sets,
                            exercise.reps,
                            exercise.rest
                        );
                        if !exercise.notes.is_empty() {
                            println!("      {}", exercise.notes.italic().dimmed());
                        }
                    }
                }
            }
        }
        None => match args.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(routine)?);
            }
            OutputFormat::Human => {
                println!("{}", saved.name.bold());
                println!();
                print!("{}", render_routine(routine));
            }
        },
    }

    Ok(())
}
