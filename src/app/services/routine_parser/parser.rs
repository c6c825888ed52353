//! Core routine sheet parser implementation
//!
//! The parse contract is best-effort by design: routine sheets are edited by
//! hand, so partial extraction beats total failure. Malformed rows are
//! dropped silently (visible only in the statistics) and an empty or
//! header-only sheet yields an empty routine, not an error. Callers present
//! "parsed but empty" separately from "fetch failed".

use tracing::debug;

use super::header::HeaderMapping;
use super::record_parser::parse_exercise_row;
use super::stats::{ParseResult, ParseStats};
use crate::app::models::Routine;

/// Parser for routine sheet CSV text
///
/// Stateless and side-effect free; a single instance may be shared across
/// callers without coordination. Every call builds a fresh [`Routine`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RoutineParser;

impl RoutineParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Parse raw sheet text into a day-grouped routine with statistics
    ///
    /// The first line is the header row; all subsequent lines are data rows.
    /// Never fails: an empty input, a header-only input, or a header with no
    /// recognized column names all produce an empty routine.
    pub fn parse(&self, raw_text: &str) -> ParseResult {
        let mut stats = ParseStats::new();
        let mut routine = Routine::new();

        if raw_text.is_empty() {
            return ParseResult { routine, stats };
        }

        let mut lines = raw_text.split('\n');
        // split always yields at least one item for non-empty input
        let header_line = lines.next().unwrap_or_default();

        let mapping = HeaderMapping::analyze(header_line);
        if mapping.is_empty() {
            // Every data row will fail the day check; normal, not an error
            debug!("No recognized column names in header: {:?}", header_line);
        }

        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            stats.total_rows += 1;

            match parse_exercise_row(line, &mapping) {
                Some(exercise) => {
                    routine.push(exercise);
                    stats.exercises_parsed += 1;
                }
                None => {
                    stats.rows_skipped += 1;
                    debug!("Skipped row {}: {:?}", stats.total_rows, line);
                }
            }
        }

        debug!(
            "Parsed {} exercises over {} days from {} rows",
            stats.exercises_parsed,
            routine.day_count(),
            stats.total_rows
        );

        ParseResult { routine, stats }
    }
}

/// Parse raw sheet text, discarding the statistics
pub fn parse_routine(raw_text: &str) -> Routine {
    RoutineParser::new().parse(raw_text).routine
}
