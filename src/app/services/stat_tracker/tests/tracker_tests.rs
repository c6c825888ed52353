//! Tests for stat tracker persistence operations

use tempfile::TempDir;

use crate::Error;
use crate::app::services::stat_tracker::StatTracker;

fn temp_tracker() -> (TempDir, StatTracker) {
    let dir = TempDir::new().unwrap();
    let tracker = StatTracker::new(dir.path().join("stats.json"));
    (dir, tracker)
}

#[test]
fn test_missing_store_file_reads_empty() {
    let (_dir, tracker) = temp_tracker();
    assert!(tracker.get_all().unwrap().is_empty());
}

#[test]
fn test_create_category_with_initial_entry() {
    let (_dir, tracker) = temp_tracker();
    let category = tracker.create_category("Peso", "kg", 80.0).unwrap();

    let loaded = tracker.get(&category.id).unwrap().unwrap();
    assert_eq!(loaded.name, "Peso");
    assert_eq!(loaded.unit, "kg");
    assert_eq!(loaded.entries.len(), 1);
    assert_eq!(loaded.latest().unwrap().value, 80.0);
}

#[test]
fn test_log_entry_appends_chronologically() {
    let (_dir, tracker) = temp_tracker();
    let category = tracker.create_category("Peso", "kg", 80.0).unwrap();

    tracker.log_entry(&category.id, 79.5).unwrap();
    tracker.log_entry(&category.id, 79.0).unwrap();

    let loaded = tracker.get(&category.id).unwrap().unwrap();
    let values: Vec<f64> = loaded.entries.iter().map(|e| e.value).collect();
    assert_eq!(values, vec![80.0, 79.5, 79.0]);
    assert_eq!(loaded.latest().unwrap().value, 79.0);
}

#[test]
fn test_log_entry_unknown_category_fails() {
    let (_dir, tracker) = temp_tracker();
    let result = tracker.log_entry("nope", 1.0);
    assert!(matches!(result, Err(Error::CategoryNotFound { .. })));
}

#[test]
fn test_delete_category() {
    let (_dir, tracker) = temp_tracker();
    let category = tracker.create_category("Peso", "kg", 80.0).unwrap();

    tracker.delete(&category.id).unwrap();
    assert!(tracker.get_all().unwrap().is_empty());
}

#[test]
fn test_delete_unknown_category_fails() {
    let (_dir, tracker) = temp_tracker();
    let result = tracker.delete("nope");
    assert!(matches!(result, Err(Error::CategoryNotFound { .. })));
}
