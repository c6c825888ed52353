//! Configuration management for rutina
//!
//! Provides the configuration structure for storage locations and network
//! settings, with platform-appropriate defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{
    APP_DIR_NAME, DEFAULT_HTTP_TIMEOUT_SECS, ROUTINES_FILE_NAME, STATS_FILE_NAME,
};

/// Global configuration for rutina
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the local stores
    pub data_dir: PathBuf,

    /// File name of the routine store within `data_dir`
    pub routines_file: String,

    /// File name of the stat store within `data_dir`
    pub stats_file: String,

    /// HTTP request timeout in seconds for sheet fetching
    pub http_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME);

        Self {
            data_dir,
            routines_file: ROUTINES_FILE_NAME.to_string(),
            stats_file: STATS_FILE_NAME.to_string(),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Create configuration with a custom data directory
    pub fn with_data_dir(mut self, data_dir: PathBuf) -> Self {
        self.data_dir = data_dir;
        self
    }

    /// Create configuration with a custom HTTP timeout
    pub fn with_http_timeout_secs(mut self, secs: u64) -> Self {
        self.http_timeout_secs = secs;
        self
    }

    /// Full path to the routine store file
    pub fn routines_path(&self) -> PathBuf {
        self.data_dir.join(&self.routines_file)
    }

    /// Full path to the stat store file
    pub fn stats_path(&self) -> PathBuf {
        self.data_dir.join(&self.stats_file)
    }

    /// HTTP timeout as a [`Duration`]
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}
