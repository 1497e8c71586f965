//! Raw grid model: the loosely typed, row-major cell data fetched from a
//! spreadsheet range, before any schema is inferred. Row 0 is the header
//! row by convention; data rows may be shorter than the header row, and
//! missing trailing cells read as empty.

pub mod cell;

use crate::grid::cell::Cell;
use serde::Deserialize;
use serde::Serialize;

/// One horizontal run of cells; insertion order is column order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Row { cells }
    }

    /// Cell at the given column, None past the row's end.
    pub fn get(&self, column: usize) -> Option<&Cell> {
        self.cells.get(column)
    }
}

/// Row-major cell data fetched from a spreadsheet range.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Grid {
    pub rows: Vec<Row>,
}

impl Grid {
    pub fn new(rows: Vec<Row>) -> Self {
        Grid { rows }
    }

    /// Header row (row 0), if the grid has any rows.
    pub fn header_row(&self) -> Option<&Row> {
        self.rows.first()
    }

    /// Rows after the header, in sheet order.
    pub fn data_rows(&self) -> &[Row] {
        if self.rows.len() > 1 {
            &self.rows[1..]
        } else {
            &[]
        }
    }

    /// Number of data rows, header excluded.
    pub fn data_row_count(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    /// Cell at (row, column); None off either edge.
    pub fn get(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|row| row.get(column))
    }
}
