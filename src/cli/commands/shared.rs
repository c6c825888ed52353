//! Shared components for CLI commands
//!
//! Common helpers used across command implementations: logging setup,
//! configuration assembly from global flags, and routine rendering.

use colored::Colorize;

use crate::app::models::Routine;
use crate::cli::args::Args;
use crate::config::Config;
use crate::Result;

/// Set up structured logging from the global verbosity flags
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rutina={}", log_level)));

    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with uptime timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}

/// Build the effective configuration from defaults and global flags
pub fn build_config(args: &Args) -> Config {
    let mut config = Config::default();
    if let Some(data_dir) = &args.data_dir {
        config = config.with_data_dir(data_dir.clone());
    }
    config
}

/// Render a routine grouped by day for terminal display
pub fn render_routine(routine: &Routine) -> String {
    let mut out = String::new();

    for plan in routine.iter() {
        out.push_str(&format!("{}\n", plan.day.bold().cyan()));
        for exercise in &plan.exercises {
            out.push_str(&format!(
                "  {}  {}\n",
                exercise.exercise.bold(),
                format_prescription(&exercise.sets, &exercise.reps, &exercise.rest)
            ));
            if !exercise.notes.is_empty() {
                out.push_str(&format!("      {}\n", exercise.notes.italic().dimmed()));
            }
        }
        out.push('\n');
    }

    out
}

/// Format the sets/reps/rest prescription, skipping empty parts
fn format_prescription(sets: &str, reps: &str, rest: &str) -> String {
    let mut parts = Vec::new();
    if !sets.is_empty() {
        parts.push(format!("{}x{}", sets, if reps.is_empty() { "?" } else { reps }));
    } else if !reps.is_empty() {
        parts.push(format!("{} reps", reps));
    }
    if !rest.is_empty() {
        parts.push(format!("descanso {}", rest));
    }
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::routine_parser::parse_routine;

    #[test]
    fn test_render_routine_lists_days_in_order() {
        colored::control::set_override(false);

        let routine = parse_routine(
            "dia,ejercicio,series,reps,descanso,notas\n\
             Lunes,Press banca,4,10,90s,\n\
             Viernes,Peso muerto,3,5,180s,Cinturon\n",
        );

        let rendered = render_routine(&routine);
        let lunes = rendered.find("Lunes").unwrap();
        let viernes = rendered.find("Viernes").unwrap();
        assert!(lunes < viernes);
        assert!(rendered.contains("4x10"));
        assert!(rendered.contains("descanso 180s"));
        assert!(rendered.contains("Cinturon"));
    }

    #[test]
    fn test_format_prescription_skips_empty_parts() {
        assert_eq!(format_prescription("4", "10", "90s"), "4x10, descanso 90s");
        assert_eq!(format_prescription("", "12", ""), "12 reps");
        assert_eq!(format_prescription("", "", ""), "");
    }
}
