use crate::grid::Row;
use std::collections::HashSet;

/// Resolves the header row into unique, human readable column names.
///
/// Literal headers are trimmed; blank headers at 0-based index `i` become
/// `Field i+1`; duplicates get an increasing integer suffix starting at 1.
/// A single seen-set spans the whole row, so suffixed and synthesized
/// names can never collide with each other.
pub fn resolve_names(header: &Row) -> Vec<String> {
    let mut seen = HashSet::<String>::new();
    let mut names = Vec::with_capacity(header.cells.len());
    for (index, cell) in header.cells.iter().enumerate() {
        let trimmed = cell.formatted_value.trim();
        let base = if trimmed.is_empty() {
            format!("Field {}", index + 1)
        } else {
            trimmed.to_owned()
        };
        let mut name = base.clone();
        let mut counter = 1;
        while !seen.insert(name.clone()) {
            name = format!("{base}{counter}");
            counter += 1;
        }
        names.push(name);
    }
    names
}

/// Spreadsheet style letters for a 1-based column number:
/// 1 = "A", 26 = "Z", 27 = "AA", 703 = "AAA".
pub fn letter_name(column: usize) -> String {
    let mut column = column;
    let mut name = String::new();
    while column > 0 {
        column -= 1;
        let digit = char::from_u32('A' as u32 + (column % 26) as u32).expect("Hardcode letters");
        column /= 26;
        name.insert(0, digit);
    }
    name
}

/// Excel style position for 0-based row and column indexes, e.g. "B3".
pub fn cell_position(row: usize, column: usize) -> String {
    format!("{}{}", letter_name(column + 1), row + 1)
}
