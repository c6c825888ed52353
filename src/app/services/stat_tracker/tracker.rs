//! JSON-file-backed stat tracker implementation

use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use tracing::debug;

use crate::app::models::{StatCategory, StatEntry};
use crate::config::Config;
use crate::{Error, Result};

/// Store for tracked stat categories
#[derive(Debug, Clone)]
pub struct StatTracker {
    path: PathBuf,
}

impl StatTracker {
    /// Create a tracker backed by the given file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a tracker at the configured stats path
    pub fn open(config: &Config) -> Self {
        Self::new(config.stats_path())
    }

    /// All categories; a missing store file reads as an empty list
    pub fn get_all(&self) -> Result<Vec<StatCategory>> {
        if !self.path.exists() {
            debug!("Stat file {} does not exist yet", self.path.display());
            return Ok(Vec::new());
        }

        let text = fs::read_to_string(&self.path).map_err(|e| {
            Error::io(
                format!("Failed to read stat store {}", self.path.display()),
                e,
            )
        })?;

        serde_json::from_str(&text).map_err(|e| {
            Error::serialization(format!("Stat store {} is corrupt", self.path.display()), e)
        })
    }

    /// Look up a category by id
    pub fn get(&self, id: &str) -> Result<Option<StatCategory>> {
        Ok(self.get_all()?.into_iter().find(|c| c.id == id))
    }

    /// Create a category with an initial entry and persist it
    pub fn create_category(&self, name: &str, unit: &str, initial_value: f64) -> Result<StatCategory> {
        let category = StatCategory::new(name, unit, initial_value);

        let mut categories = self.get_all()?;
        categories.push(category.clone());
        self.write_all(&categories)?;

        Ok(category)
    }

    /// Append an entry to a category, returning the recorded entry
    pub fn log_entry(&self, id: &str, value: f64) -> Result<StatEntry> {
        let mut categories = self.get_all()?;
        let category = categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| Error::category_not_found(id))?;

        let entry = StatEntry {
            date: Utc::now(),
            value,
        };
        category.entries.push(entry.clone());
        self.write_all(&categories)?;

        Ok(entry)
    }

    /// Remove a category by id
    pub fn delete(&self, id: &str) -> Result<()> {
        let mut categories = self.get_all()?;
        let before = categories.len();
        categories.retain(|c| c.id != id);

        if categories.len() == before {
            return Err(Error::category_not_found(id));
        }
        self.write_all(&categories)
    }

    fn write_all(&self, categories: &[StatCategory]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::io(
                    format!("Failed to create store directory {}", parent.display()),
                    e,
                )
            })?;
        }

        let text = serde_json::to_string_pretty(categories)
            .map_err(|e| Error::serialization("Failed to serialize stat store", e))?;

        fs::write(&self.path, text).map_err(|e| {
            Error::io(
                format!("Failed to write stat store {}", self.path.display()),
                e,
            )
        })
    }
}
