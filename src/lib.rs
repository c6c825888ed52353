//! Rutina Library
//!
//! A Rust library for importing hand-edited workout routine spreadsheets
//! (Google Sheets CSV exports) into a structured, day-grouped routine.
//!
//! This library provides tools for:
//! - Parsing routine sheets with localized header aliasing and quote-aware
//!   field splitting
//! - Converting Google Sheets share links into CSV export URLs and fetching
//!   the exported text
//! - Caching imported routines locally with offline fallback
//! - Tracking simple numeric training stats over time

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod routine_parser;
        pub mod routine_store;
        pub mod sheet_fetcher;
        pub mod stat_tracker;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Exercise, Routine, SavedRoutine, StatCategory, StatEntry};
pub use config::Config;

/// Result type alias for rutina operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for routine import and storage operations
///
/// The routine parser itself never fails; errors here cover the surrounding
/// concerns: fetching sheet text, reading and writing the local stores, and
/// configuration problems.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Sheet fetch failed (network or HTTP status)
    #[error("Failed to fetch sheet '{url}': {message}")]
    Fetch {
        url: String,
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// URL is not a recognizable Google Sheets share link
    #[error("Not a valid Google Sheets link: {url}")]
    InvalidSheetUrl { url: String },

    /// Local store read/write error
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Saved routine not found in the store
    #[error("Routine not found: id = {id}")]
    RoutineNotFound { id: String },

    /// Stat category not found in the tracker
    #[error("Stat category not found: id = {id}")]
    CategoryNotFound { id: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a fetch error with context
    pub fn fetch(
        url: impl Into<String>,
        message: impl Into<String>,
        source: Option<reqwest::Error>,
    ) -> Self {
        Self::Fetch {
            url: url.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid sheet URL error
    pub fn invalid_sheet_url(url: impl Into<String>) -> Self {
        Self::InvalidSheetUrl { url: url.into() }
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create a serialization error with context
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a routine not found error
    pub fn routine_not_found(id: impl Into<String>) -> Self {
        Self::RoutineNotFound { id: id.into() }
    }

    /// Create a stat category not found error
    pub fn category_not_found(id: impl Into<String>) -> Self {
        Self::CategoryNotFound { id: id.into() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        let url = error
            .url()
            .map(|u| u.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        Self::Fetch {
            url,
            message: "HTTP request failed".to_string(),
            source: Some(error),
        }
    }
}
