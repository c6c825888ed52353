//! Header aliasing and column index resolution
//!
//! Routine sheets are written with localized column names ("Dia",
//! "Ejercicio", ...). This module resolves each header token through a fixed
//! alias table to a canonical field and records which column position holds
//! that field.

use std::collections::HashMap;

use super::tokenizer::strip_enclosing_quotes;

/// Canonical fields of an exercise record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Day,
    Exercise,
    Sets,
    Reps,
    Rest,
    Notes,
}

impl Field {
    /// All canonical fields, in record order
    pub const ALL: [Field; 6] = [
        Field::Day,
        Field::Exercise,
        Field::Sets,
        Field::Reps,
        Field::Rest,
        Field::Notes,
    ];
}

/// Alias table mapping lowercased localized header names to canonical fields
///
/// Both "repeticiones" and the short form "reps" resolve to [`Field::Reps`].
const HEADER_ALIASES: [(&str, Field); 7] = [
    ("dia", Field::Day),
    ("ejercicio", Field::Exercise),
    ("series", Field::Sets),
    ("repeticiones", Field::Reps),
    ("reps", Field::Reps),
    ("descanso", Field::Rest),
    ("notas", Field::Notes),
];

/// Resolve a cleaned (trimmed, lowercased, unquoted) header token
fn resolve_alias(token: &str) -> Option<Field> {
    HEADER_ALIASES
        .iter()
        .find(|(alias, _)| *alias == token)
        .map(|(_, field)| *field)
}

/// Canonical field to column position mapping for one sheet
#[derive(Debug, Clone)]
pub struct HeaderMapping {
    indices: HashMap<Field, usize>,
}

impl HeaderMapping {
    /// Analyze a header line and build the column index table
    ///
    /// Header tokens are split on plain commas, trimmed, lowercased, and
    /// stripped of one pair of enclosing quotes before alias lookup.
    /// Unrecognized headers contribute nothing; when duplicate headers map
    /// to the same field, the later column wins.
    pub fn analyze(header_line: &str) -> Self {
        let mut indices = HashMap::new();

        for (index, token) in header_line.split(',').enumerate() {
            let cleaned = strip_enclosing_quotes(&token.trim().to_lowercase()).to_string();
            if let Some(field) = resolve_alias(&cleaned) {
                indices.insert(field, index);
            }
        }

        Self { indices }
    }

    /// Column position of a canonical field, if the header declared it
    pub fn get_index(&self, field: Field) -> Option<usize> {
        self.indices.get(&field).copied()
    }

    /// Number of recognized columns
    ///
    /// Data rows with fewer fields than this are considered too short and
    /// are skipped.
    pub fn recognized_count(&self) -> usize {
        self.indices.len()
    }

    /// True when the header contained no recognized column name
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
