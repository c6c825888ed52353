//! Refresh command implementation
//!
//! Re-fetches a saved routine's sheet and replaces the cached copy. When the
//! network is unavailable the cached copy is kept and reported as such;
//! refresh only fails outright when there is no cache to fall back on.

use chrono::Utc;
use colored::Colorize;
use tracing::{info, warn};

use super::shared::render_routine;
use crate::app::services::routine_parser::RoutineParser;
use crate::app::services::routine_store::RoutineStore;
use crate::app::services::sheet_fetcher::SheetFetcher;
use crate::cli::args::RefreshArgs;
use crate::config::Config;
use crate::{Error, Result};

/// Refresh command runner
pub async fn run_refresh(args: RefreshArgs, config: &Config) -> Result<()> {
    let store = RoutineStore::open(config);
    let mut saved = store
        .get(&args.id)?
        .ok_or_else(|| Error::routine_not_found(&args.id))?;

    let fetcher = SheetFetcher::new(config.http_timeout())?;

    match fetcher.fetch_csv(&saved.url).await {
        Ok(raw_text) => {
            let result = RoutineParser::new().parse(&raw_text);

            if result.routine.is_empty() {
                println!(
                    "{}",
                    "The sheet was fetched but contained no usable rows; keeping cached data."
                        .yellow()
                );
                return Ok(());
            }

            saved.last_known_data = Some(result.routine.clone());
            saved.imported_at = Utc::now();
            store.update(&saved)?;

            info!(
                "Refreshed '{}': {} days, {} exercises",
                saved.name,
                result.routine.day_count(),
                result.routine.exercise_count()
            );
            println!("{} '{}'", "Refreshed".green().bold(), saved.name);
            println!();
            print!("{}", render_routine(&result.routine));
            Ok(())
        }
        Err(fetch_error) => match &saved.last_known_data {
            Some(cached) => {
                warn!("Fetch failed, using cached data: {}", fetch_error);
                println!(
                    "{} showing cached data from {}",
                    "Offline:".yellow().bold(),
                    saved.imported_at.format("%Y-%m-%d %H:%M")
                );
                println!();
                print!("{}", render_routine(cached));
                Ok(())
            }
            None => Err(fetch_error),
        },
    }
}
