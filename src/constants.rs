//! Application constants for rutina
//!
//! This module contains default values and fixed patterns used throughout
//! the application.

// =============================================================================
// Storage
// =============================================================================

/// Application directory name under the platform data directory
pub const APP_DIR_NAME: &str = "rutina";

/// File holding all saved routines
pub const ROUTINES_FILE_NAME: &str = "routines.json";

/// File holding all stat categories
pub const STATS_FILE_NAME: &str = "stats.json";

// =============================================================================
// Sheet fetching
// =============================================================================

/// Pattern extracting the document id from a Google Sheets share link
pub const SHEET_ID_PATTERN: &str = r"/d/([a-zA-Z0-9-_]+)";

/// Default HTTP request timeout in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
