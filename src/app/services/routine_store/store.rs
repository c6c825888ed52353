//! JSON-file-backed routine store implementation

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::app::models::SavedRoutine;
use crate::config::Config;
use crate::{Error, Result};

/// Store for imported routines
///
/// Each operation reads the full collection, applies the change, and writes
/// the collection back. Collections are a handful of routines at most, so
/// the simplicity wins over incremental updates.
#[derive(Debug, Clone)]
pub struct RoutineStore {
    path: PathBuf,
}

impl RoutineStore {
    /// Create a store backed by the given file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a store at the configured routines path
    pub fn open(config: &Config) -> Self {
        Self::new(config.routines_path())
    }

    /// All saved routines; a missing store file reads as an empty list
    pub fn get_all(&self) -> Result<Vec<SavedRoutine>> {
        if !self.path.exists() {
            debug!("Store file {} does not exist yet", self.path.display());
            return Ok(Vec::new());
        }

        let text = fs::read_to_string(&self.path).map_err(|e| {
            Error::io(
                format!("Failed to read routine store {}", self.path.display()),
                e,
            )
        })?;

        serde_json::from_str(&text).map_err(|e| {
            Error::serialization(
                format!("Routine store {} is corrupt", self.path.display()),
                e,
            )
        })
    }

    /// Look up a saved routine by id
    pub fn get(&self, id: &str) -> Result<Option<SavedRoutine>> {
        Ok(self.get_all()?.into_iter().find(|r| r.id == id))
    }

    /// Append a new routine to the store
    pub fn save(&self, routine: SavedRoutine) -> Result<()> {
        let mut routines = self.get_all()?;
        routines.push(routine);
        self.write_all(&routines)
    }

    /// Replace the stored routine with the same id
    pub fn update(&self, routine: &SavedRoutine) -> Result<()> {
        let mut routines = self.get_all()?;
        let position = routines
            .iter()
            .position(|r| r.id == routine.id)
            .ok_or_else(|| Error::routine_not_found(&routine.id))?;

        routines[position] = routine.clone();
        self.write_all(&routines)
    }

    /// Remove a routine by id
    pub fn delete(&self, id: &str) -> Result<()> {
        let mut routines = self.get_all()?;
        let before = routines.len();
        routines.retain(|r| r.id != id);

        if routines.len() == before {
            return Err(Error::routine_not_found(id));
        }
        self.write_all(&routines)
    }

    fn write_all(&self, routines: &[SavedRoutine]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::io(
                    format!("Failed to create store directory {}", parent.display()),
                    e,
                )
            })?;
        }

        let text = serde_json::to_string_pretty(routines)
            .map_err(|e| Error::serialization("Failed to serialize routine store", e))?;

        fs::write(&self.path, text).map_err(|e| {
            Error::io(
                format!("Failed to write routine store {}", self.path.display()),
                e,
            )
        })
    }
}
