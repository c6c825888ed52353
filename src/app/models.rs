//! Core data models for rutina
//!
//! Defines the parsed routine structures, the locally stored routine wrapper,
//! and the stat tracking records. All parsed fields are free text by design:
//! sheet authors write things like "3-4" or "al fallo" and the values are
//! displayed as-is.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One movement prescription from a routine sheet, fully resolved
///
/// All fields are untyped strings. `notes` may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Day label used for grouping (not validated against a calendar)
    pub day: String,

    /// Exercise name
    pub exercise: String,

    /// Prescribed sets, free text
    pub sets: String,

    /// Prescribed reps, free text
    pub reps: String,

    /// Rest between sets, free text
    pub rest: String,

    /// Optional author notes
    pub notes: String,
}

/// All exercises prescribed for one day, in sheet order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    /// Day label as written in the sheet
    pub day: String,

    /// Exercises for this day, preserving row order
    pub exercises: Vec<Exercise>,
}

/// A full parsed workout plan, grouped by day
///
/// Days appear in first-seen order and exercises within a day preserve their
/// sheet row order. Serialized as an ordered array of day groups so the
/// structure round-trips losslessly through JSON. Day counts are small, so
/// lookup is a linear scan over the ordered group list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Routine {
    plans: Vec<DayPlan>,
}

impl Routine {
    /// Create an empty routine
    pub fn new() -> Self {
        Self { plans: Vec::new() }
    }

    /// Append an exercise to its day group, creating the group on first use
    pub fn push(&mut self, exercise: Exercise) {
        match self.plans.iter_mut().find(|p| p.day == exercise.day) {
            Some(plan) => plan.exercises.push(exercise),
            None => self.plans.push(DayPlan {
                day: exercise.day.clone(),
                exercises: vec![exercise],
            }),
        }
    }

    /// Exercises for a given day label, if present
    pub fn get(&self, day: &str) -> Option<&[Exercise]> {
        self.plans
            .iter()
            .find(|p| p.day == day)
            .map(|p| p.exercises.as_slice())
    }

    /// Day labels in first-seen order
    pub fn days(&self) -> impl Iterator<Item = &str> {
        self.plans.iter().map(|p| p.day.as_str())
    }

    /// Iterate over day groups in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = &DayPlan> {
        self.plans.iter()
    }

    /// Number of distinct days
    pub fn day_count(&self) -> usize {
        self.plans.len()
    }

    /// Total number of exercises across all days
    pub fn exercise_count(&self) -> usize {
        self.plans.iter().map(|p| p.exercises.len()).sum()
    }

    /// True when no rows qualified for inclusion
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

/// A routine saved in the local store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedRoutine {
    /// Store identifier (millisecond timestamp rendered as a string)
    pub id: String,

    /// User-chosen display name
    pub name: String,

    /// Google Sheets share link the routine was imported from
    pub url: String,

    /// Cached copy of the last successful parse, used when offline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_known_data: Option<Routine>,

    /// When the routine was first imported
    pub imported_at: DateTime<Utc>,
}

impl SavedRoutine {
    /// Create a new saved routine with a freshly generated id
    pub fn new(name: impl Into<String>, url: impl Into<String>, data: Option<Routine>) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            url: url.into(),
            last_known_data: data,
            imported_at: Utc::now(),
        }
    }
}

/// One recorded measurement in a stat category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatEntry {
    /// When the measurement was taken
    pub date: DateTime<Utc>,

    /// Measured value in the category's unit
    pub value: f64,
}

/// A tracked numeric stat, e.g. body weight or a lift's working weight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatCategory {
    /// Store identifier (millisecond timestamp rendered as a string)
    pub id: String,

    /// Display name
    pub name: String,

    /// Unit the values are recorded in, e.g. "kg"
    pub unit: String,

    /// Recorded entries in chronological (insertion) order
    pub entries: Vec<StatEntry>,
}

impl StatCategory {
    /// Create a new category with a freshly generated id and one initial entry
    pub fn new(name: impl Into<String>, unit: impl Into<String>, initial_value: f64) -> Self {
        Self {
            id: generate_id(),
            name: name.into(),
            unit: unit.into(),
            entries: vec![StatEntry {
                date: Utc::now(),
                value: initial_value,
            }],
        }
    }

    /// The most recently recorded entry
    pub fn latest(&self) -> Option<&StatEntry> {
        self.entries.last()
    }
}

/// Generate a store identifier from the current time in milliseconds
pub fn generate_id() -> String {
    Utc::now().timestamp_millis().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(day: &str, name: &str) -> Exercise {
        Exercise {
            day: day.to_string(),
            exercise: name.to_string(),
            sets: "4".to_string(),
            reps: "8".to_string(),
            rest: "90s".to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_routine_preserves_day_order() {
        let mut routine = Routine::new();
        routine.push(exercise("Lunes", "Press banca"));
        routine.push(exercise("Miercoles", "Sentadilla"));
        routine.push(exercise("Lunes", "Remo"));

        let days: Vec<&str> = routine.days().collect();
        assert_eq!(days, vec!["Lunes", "Miercoles"]);
        assert_eq!(routine.get("Lunes").unwrap().len(), 2);
        assert_eq!(routine.exercise_count(), 3);
    }

    #[test]
    fn test_routine_preserves_row_order_within_day() {
        let mut routine = Routine::new();
        routine.push(exercise("Lunes", "Press banca"));
        routine.push(exercise("Lunes", "Remo"));

        let exercises = routine.get("Lunes").unwrap();
        assert_eq!(exercises[0].exercise, "Press banca");
        assert_eq!(exercises[1].exercise, "Remo");
    }

    #[test]
    fn test_routine_json_round_trip_keeps_order() {
        let mut routine = Routine::new();
        routine.push(exercise("Viernes", "Peso muerto"));
        routine.push(exercise("Lunes", "Press banca"));
        routine.push(exercise("Viernes", "Dominadas"));

        let json = serde_json::to_string(&routine).unwrap();
        let restored: Routine = serde_json::from_str(&json).unwrap();

        assert_eq!(routine, restored);
        let days: Vec<&str> = restored.days().collect();
        assert_eq!(days, vec!["Viernes", "Lunes"]);
    }

    #[test]
    fn test_latest_entry() {
        let mut category = StatCategory::new("Peso", "kg", 80.0);
        category.entries.push(StatEntry {
            date: Utc::now(),
            value: 79.5,
        });

        assert_eq!(category.latest().unwrap().value, 79.5);
    }
}
