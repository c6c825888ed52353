//! Parsing statistics and result structure for routine sheets
//!
//! The parser never fails, so the statistics are the only signal a caller
//! gets about how much of a hand-edited sheet actually qualified.

use crate::app::models::Routine;

/// Parsing result with the day-grouped routine and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// The parsed routine, possibly empty
    pub routine: Routine,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Non-blank data rows encountered after the header
    pub total_rows: usize,

    /// Rows that qualified and became exercise records
    pub exercises_parsed: usize,

    /// Rows dropped as too short, day-less, or otherwise empty
    pub rows_skipped: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of data rows that qualified, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.exercises_parsed as f64 / self.total_rows as f64) * 100.0
        }
    }
}
