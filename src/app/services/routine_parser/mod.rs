//! Routine sheet parser
//!
//! This module converts raw routine sheet text (a spreadsheet exported as
//! CSV) into a [`Routine`](crate::Routine) grouped by day. The parser is
//! deliberately forgiving: sheets are hand-edited, so malformed rows are
//! dropped rather than failing the whole import.
//!
//! ## Architecture
//!
//! - [`parser`] - Parse orchestration over header and data rows
//! - [`header`] - Localized header aliasing and column index resolution
//! - [`tokenizer`] - Quote-aware comma splitting and field cleanup
//! - [`record_parser`] - Individual data row processing
//! - [`stats`] - Parsing statistics and result structure
//!
//! ## Usage
//!
//! ```rust
//! use rutina::app::services::routine_parser::RoutineParser;
//!
//! let parser = RoutineParser::new();
//! let result = parser.parse("dia,ejercicio,series\nLunes,Press banca,4\n");
//!
//! assert_eq!(result.routine.day_count(), 1);
//! assert_eq!(result.stats.exercises_parsed, 1);
//! ```

pub mod header;
pub mod parser;
pub mod record_parser;
pub mod stats;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use header::{Field, HeaderMapping};
pub use parser::{RoutineParser, parse_routine};
pub use stats::{ParseResult, ParseStats};
