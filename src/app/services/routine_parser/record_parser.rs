//! Individual data row processing
//!
//! Converts one data row into an [`Exercise`], or `None` when the row does
//! not qualify: too few fields, no day label, or nothing but a day label.

use super::header::{Field, HeaderMapping};
use super::tokenizer::{clean_field, split_row};
use crate::app::models::Exercise;

/// Parse a single data row into an exercise record
///
/// Returns `None` for rows that are too short for the recognized columns,
/// rows without a day label, and rows where every field other than the day
/// is empty after cleanup.
pub fn parse_exercise_row(line: &str, mapping: &HeaderMapping) -> Option<Exercise> {
    let values = split_row(line);

    if values.len() < mapping.recognized_count() {
        return None;
    }

    // Out-of-range column indices resolve to an empty field
    let resolve = |field: Field| -> String {
        mapping
            .get_index(field)
            .and_then(|index| values.get(index))
            .map(|raw| clean_field(raw))
            .unwrap_or_default()
    };

    let exercise = Exercise {
        day: resolve(Field::Day),
        exercise: resolve(Field::Exercise),
        sets: resolve(Field::Sets),
        reps: resolve(Field::Reps),
        rest: resolve(Field::Rest),
        notes: resolve(Field::Notes),
    };

    if exercise.day.is_empty() {
        return None;
    }

    let has_data = !exercise.exercise.is_empty()
        || !exercise.sets.is_empty()
        || !exercise.reps.is_empty()
        || !exercise.rest.is_empty()
        || !exercise.notes.is_empty();

    has_data.then_some(exercise)
}
