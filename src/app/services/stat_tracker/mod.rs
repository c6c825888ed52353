//! Training stat tracker
//!
//! Tracks simple numeric stats over time: body weight, a lift's working
//! weight, whatever the user cares to log. Each category holds a
//! chronological list of timestamped entries; the newest entry is the
//! current value. Backed by the same flat JSON-file store shape as the
//! routine store, in its own file.

pub mod tracker;

#[cfg(test)]
pub mod tests;

pub use tracker::StatTracker;
