//! Local routine store
//!
//! A flat JSON-file-backed store for imported routines, mirroring a simple
//! key-value cache: the whole collection is read and written as one
//! document. A missing store file reads as an empty collection.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rutina::Config;
//! use rutina::app::models::SavedRoutine;
//! use rutina::app::services::routine_store::RoutineStore;
//!
//! # fn example() -> rutina::Result<()> {
//! let store = RoutineStore::open(&Config::default());
//! store.save(SavedRoutine::new("Fuerza", "https://docs.google.com/...", None))?;
//! # Ok(())
//! # }
//! ```

pub mod store;

#[cfg(test)]
pub mod tests;

pub use store::RoutineStore;
