//! Tests for header aliasing and column index resolution

use crate::app::services::routine_parser::header::{Field, HeaderMapping};

#[test]
fn test_lowercase_headers_resolve() {
    let mapping = HeaderMapping::analyze("dia,ejercicio,series,repeticiones,descanso,notas");

    assert_eq!(mapping.get_index(Field::Day), Some(0));
    assert_eq!(mapping.get_index(Field::Exercise), Some(1));
    assert_eq!(mapping.get_index(Field::Sets), Some(2));
    assert_eq!(mapping.get_index(Field::Reps), Some(3));
    assert_eq!(mapping.get_index(Field::Rest), Some(4));
    assert_eq!(mapping.get_index(Field::Notes), Some(5));
    assert_eq!(mapping.recognized_count(), 6);
}

#[test]
fn test_capitalized_headers_resolve_identically() {
    let upper = HeaderMapping::analyze("Dia,Ejercicio,Series,Reps,Descanso,Notas");
    let lower = HeaderMapping::analyze("dia,ejercicio,series,repeticiones,descanso,notas");

    for field in Field::ALL {
        assert_eq!(upper.get_index(field), lower.get_index(field));
    }
}

#[test]
fn test_quoted_header_token_still_matches() {
    let mapping = HeaderMapping::analyze("\"Dia\",\"Ejercicio\",Series");

    assert_eq!(mapping.get_index(Field::Day), Some(0));
    assert_eq!(mapping.get_index(Field::Exercise), Some(1));
    assert_eq!(mapping.get_index(Field::Sets), Some(2));
}

#[test]
fn test_whitespace_around_headers_ignored() {
    let mapping = HeaderMapping::analyze(" dia , ejercicio ,series");

    assert_eq!(mapping.get_index(Field::Day), Some(0));
    assert_eq!(mapping.get_index(Field::Exercise), Some(1));
}

#[test]
fn test_unrecognized_headers_contribute_nothing() {
    let mapping = HeaderMapping::analyze("dia,tempo,ejercicio");

    assert_eq!(mapping.recognized_count(), 2);
    assert_eq!(mapping.get_index(Field::Day), Some(0));
    assert_eq!(mapping.get_index(Field::Exercise), Some(2));
}

#[test]
fn test_duplicate_alias_later_column_wins() {
    // "repeticiones" and "reps" both map to Reps; the later column wins
    let mapping = HeaderMapping::analyze("dia,repeticiones,reps");

    assert_eq!(mapping.get_index(Field::Reps), Some(2));
    assert_eq!(mapping.recognized_count(), 2);
}

#[test]
fn test_header_without_recognized_names_is_empty() {
    let mapping = HeaderMapping::analyze("foo,bar,baz");

    assert!(mapping.is_empty());
    assert_eq!(mapping.recognized_count(), 0);
}
