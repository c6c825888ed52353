//! Import command implementation
//!
//! Fetches or reads a routine sheet, parses it, and saves the result to the
//! local store. A sheet that parses to nothing is a warning, not an error:
//! the fetch worked, the content just had no usable rows.

use std::fs;

use colored::Colorize;
use tracing::{debug, info, warn};

use super::shared::render_routine;
use crate::app::models::SavedRoutine;
use crate::app::services::routine_parser::RoutineParser;
use crate::app::services::routine_store::RoutineStore;
use crate::app::services::sheet_fetcher::SheetFetcher;
use crate::cli::args::ImportArgs;
use crate::config::Config;
use crate::{Error, Result};

/// Import command runner
pub async fn run_import(args: ImportArgs, config: &Config) -> Result<()> {
    args.validate()?;

    let raw_text = if args.is_url() {
        info!("Fetching sheet from {}", args.source);
        let fetcher = SheetFetcher::new(config.http_timeout())?;
        fetcher.fetch_csv(&args.source).await?
    } else {
        info!("Reading sheet from file {}", args.source);
        fs::read_to_string(&args.source)
            .map_err(|e| Error::io(format!("Failed to read {}", args.source), e))?
    };

    let result = RoutineParser::new().parse(&raw_text);
    debug!(
        "Parse stats: {} rows, {} parsed, {} skipped",
        result.stats.total_rows, result.stats.exercises_parsed, result.stats.rows_skipped
    );

    if result.routine.is_empty() {
        warn!("Sheet contained no usable rows");
        println!(
            "{}",
            "The sheet was fetched but contained no usable rows. \
             Check the header row (Dia, Ejercicio, Series, Repeticiones, Descanso, Notas)."
                .yellow()
        );
    }

    let saved = SavedRoutine::new(&args.name, &args.source, Some(result.routine.clone()));
    let id = saved.id.clone();

    let store = RoutineStore::open(config);
    store.save(saved)?;

    println!(
        "{} '{}' ({} days, {} exercises)",
        "Imported".green().bold(),
        args.name,
        result.routine.day_count(),
        result.routine.exercise_count()
    );
    if result.stats.rows_skipped > 0 {
        println!(
            "{} {} row(s) skipped",
            "Note:".yellow(),
            result.stats.rows_skipped
        );
    }
    println!("Id: {}", id.bold());

    if !result.routine.is_empty() {
        println!();
        print!("{}", render_routine(&result.routine));
    }

    Ok(())
}
