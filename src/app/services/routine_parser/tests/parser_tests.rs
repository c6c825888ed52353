//! Tests for the routine sheet parser contract

use super::{quoted_sheet, sample_sheet};
use crate::app::services::routine_parser::{RoutineParser, parse_routine};

#[test]
fn test_parse_well_formed_sheet() {
    let result = RoutineParser::new().parse(sample_sheet());

    assert_eq!(result.stats.total_rows, 4);
    assert_eq!(result.stats.exercises_parsed, 4);
    assert_eq!(result.stats.rows_skipped, 0);

    let routine = result.routine;
    let days: Vec<&str> = routine.days().collect();
    assert_eq!(days, vec!["Lunes", "Miercoles", "Viernes"]);

    let lunes = routine.get("Lunes").unwrap();
    assert_eq!(lunes.len(), 2);
    assert_eq!(lunes[0].exercise, "Press banca");
    assert_eq!(lunes[0].sets, "4");
    assert_eq!(lunes[0].reps, "10");
    assert_eq!(lunes[0].rest, "90s");
    assert_eq!(lunes[0].notes, "");
    assert_eq!(lunes[1].exercise, "Remo con barra");
    assert_eq!(lunes[1].notes, "Espalda recta");
}

#[test]
fn test_parse_is_idempotent() {
    let first = parse_routine(sample_sheet());
    let second = parse_routine(sample_sheet());

    assert_eq!(first, second);
}

#[test]
fn test_quoted_comma_field_not_split() {
    let routine = parse_routine(quoted_sheet());

    let lunes = routine.get("Lunes").unwrap();
    assert_eq!(lunes[0].sets, "4, 5");
    assert_eq!(lunes[0].reps, "8");
    assert_eq!(lunes[0].notes, "Cuidado con la espalda");
}

#[test]
fn test_doubled_quotes_unescaped() {
    let routine = parse_routine(quoted_sheet());

    let martes = routine.get("Martes").unwrap();
    assert_eq!(martes[0].notes, "He said \"go heavy\"");
}

#[test]
fn test_empty_input_yields_empty_routine() {
    let result = RoutineParser::new().parse("");

    assert!(result.routine.is_empty());
    assert_eq!(result.stats.total_rows, 0);
}

#[test]
fn test_header_only_input_yields_empty_routine() {
    let routine = parse_routine("dia,ejercicio,series,reps,descanso,notas\n");

    assert!(routine.is_empty());
}

#[test]
fn test_unrecognized_header_yields_empty_routine() {
    let text = "foo,bar,baz\nLunes,Press banca,4\n";
    let result = RoutineParser::new().parse(text);

    assert!(result.routine.is_empty());
    assert_eq!(result.stats.rows_skipped, 1);
}

#[test]
fn test_row_missing_day_excluded() {
    let text = "dia,ejercicio,series,reps,descanso,notas\n\
                ,Press banca,4,10,90s,Completo\n";
    let result = RoutineParser::new().parse(text);

    assert!(result.routine.is_empty());
    assert_eq!(result.stats.rows_skipped, 1);
}

#[test]
fn test_row_with_only_day_excluded() {
    let text = "dia,ejercicio,series,reps,descanso,notas\n\
                Lunes,,,,,\n";
    let result = RoutineParser::new().parse(text);

    assert!(result.routine.is_empty());
    assert_eq!(result.stats.rows_skipped, 1);
}

#[test]
fn test_short_row_skipped() {
    let text = "dia,ejercicio,series,reps,descanso,notas\n\
                Lunes,Press banca\n\
                Martes,Sentadilla,5,5,180s,\n";
    let result = RoutineParser::new().parse(text);

    assert_eq!(result.stats.rows_skipped, 1);
    assert_eq!(result.stats.exercises_parsed, 1);
    assert!(result.routine.get("Lunes").is_none());
    assert!(result.routine.get("Martes").is_some());
}

#[test]
fn test_trailing_empty_fields_still_included() {
    let text = "dia,ejercicio,series,reps,descanso,notas\n\
                Lunes,Press banca,4,10,60s,\n";
    let routine = parse_routine(text);

    let lunes = routine.get("Lunes").unwrap();
    assert_eq!(lunes[0].exercise, "Press banca");
    assert_eq!(lunes[0].notes, "");
}

#[test]
fn test_whitespace_only_lines_skipped() {
    let text = "dia,ejercicio,series,reps,descanso,notas\n\
                \n\
                   \n\
                Lunes,Press banca,4,10,60s,\n";
    let result = RoutineParser::new().parse(text);

    assert_eq!(result.stats.total_rows, 1);
    assert_eq!(result.stats.exercises_parsed, 1);
}

#[test]
fn test_row_order_preserved_within_day() {
    let text = "dia,ejercicio,series,reps,descanso,notas\n\
                Lunes,Press banca,4,10,90s,\n\
                Lunes,Aperturas,3,12,60s,\n";
    let routine = parse_routine(text);

    let lunes = routine.get("Lunes").unwrap();
    assert_eq!(lunes[0].exercise, "Press banca");
    assert_eq!(lunes[1].exercise, "Aperturas");
}

#[test]
fn test_no_numeric_coercion() {
    let text = "dia,ejercicio,series,reps,descanso,notas\n\
                Lunes,Curl de biceps,3-4,al fallo,60-90s,\n";
    let routine = parse_routine(text);

    let lunes = routine.get("Lunes").unwrap();
    assert_eq!(lunes[0].sets, "3-4");
    assert_eq!(lunes[0].reps, "al fallo");
    assert_eq!(lunes[0].rest, "60-90s");
}

#[test]
fn test_stats_success_rate() {
    let text = "dia,ejercicio,series,reps,descanso,notas\n\
                Lunes,Press banca,4,10,90s,\n\
                ,Sentadilla,5,5,180s,\n";
    let result = RoutineParser::new().parse(text);

    assert_eq!(result.stats.total_rows, 2);
    assert!((result.stats.success_rate() - 50.0).abs() < f64::EPSILON);
}

#[test]
fn test_routine_round_trips_through_json() {
    let routine = parse_routine(quoted_sheet());

    let json = serde_json::to_string(&routine).unwrap();
    let restored = serde_json::from_str(&json).unwrap();

    assert_eq!(routine, restored);
}
