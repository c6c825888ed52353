//! Test utilities and fixtures for routine sheet parser testing

// Test modules
mod header_tests;
mod parser_tests;

/// A well-formed routine sheet export with capitalized Spanish headers
pub fn sample_sheet() -> &'static str {
    "Dia,Ejercicio,Series,Repeticiones,Descanso,Notas\n\
     Lunes,Press banca,4,10,90s,\n\
     Lunes,Remo con barra,4,8,90s,Espalda recta\n\
     Miercoles,Sentadilla,5,5,180s,\n\
     Viernes,Peso muerto,3,5,180s,Cinturon\n"
}

/// A sheet exercising quoting: embedded commas and doubled quotes
pub fn quoted_sheet() -> &'static str {
    "dia,ejercicio,series,reps,descanso,notas\n\
     Lunes,Sentadilla,\"4, 5\",8,90s,Cuidado con la espalda\n\
     Martes,Press militar,3,10,60s,\"He said \"\"go heavy\"\"\"\n"
}
