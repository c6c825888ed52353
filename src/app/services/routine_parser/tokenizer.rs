//! Quote-aware field splitting for routine sheet rows
//!
//! Spreadsheet exports quote any field containing a comma, so a plain comma
//! split would break rows like `Lunes,Press banca,"3, o 4",10,60s,`. The
//! splitter here is a single pass tracking whether the cursor sits inside a
//! quoted span; commas inside quotes do not separate fields.

/// Split a data row on commas that lie outside quoted spans
///
/// Quote characters are kept in the emitted fields; [`clean_field`] strips
/// them later. Behavior on unbalanced quoting is implementation-defined: the
/// in-quote state simply toggles on every quote character.
pub fn split_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    fields.push(current);

    fields
}

/// Strip one pair of enclosing double quotes, if present
///
/// A lone quote character is left alone; only a value that both starts and
/// ends with a quote loses exactly one from each end.
pub fn strip_enclosing_quotes(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Resolve a raw field to its final value
///
/// Trims surrounding whitespace, strips one enclosing quote pair, then
/// unescapes CSV-style doubled quotes (`""` becomes `"`).
pub fn clean_field(raw: &str) -> String {
    strip_enclosing_quotes(raw.trim()).replace("\"\"", "\"")
}
