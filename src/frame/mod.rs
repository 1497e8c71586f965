//! Typed columnar output: the frame handed to the charting layer, with
//! per-column units and the warnings collected while building it.

pub mod column;
pub mod naming;

use crate::grid::cell::TypeTag;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Column vectors by resolved type. Entries are null where the source
/// cell was absent, blank, or failed to parse.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldValues {
    Time(Vec<Option<NaiveDateTime>>),
    Number(Vec<Option<f64>>),
    String(Vec<Option<String>>),
}

impl FieldValues {
    /// Allocates a vector of the given kind pre-filled with nulls.
    pub(crate) fn nulls(kind: TypeTag, len: usize) -> Self {
        match kind {
            TypeTag::Time => FieldValues::Time(vec![None; len]),
            TypeTag::Number => FieldValues::Number(vec![None; len]),
            TypeTag::String => FieldValues::String(vec![None; len]),
        }
    }

    /// Number of slots, null or not.
    pub fn len(&self) -> usize {
        match self {
            FieldValues::Time(slots) => slots.len(),
            FieldValues::Number(slots) => slots.len(),
            FieldValues::String(slots) => slots.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolved type of this column.
    pub fn kind(&self) -> TypeTag {
        match self {
            FieldValues::Time(_) => TypeTag::Time,
            FieldValues::Number(_) => TypeTag::Number,
            FieldValues::String(_) => TypeTag::String,
        }
    }
}

/// A named, typed, nullable column with an optional display unit.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    /// Display unit such as "percent" or a currency code
    pub unit: Option<String>,
    pub values: FieldValues,
}

/// Query scoped facts attached to the frame for the caller.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameMeta {
    pub spreadsheet_id: String,
    pub range: String,
    /// Whether the grid came from the fetch cache
    pub hit: bool,
    /// Non fatal anomalies collected during the transform
    pub warnings: Vec<String>,
}

/// The typed table produced by one transform call. Every field vector has
/// the same length: the grid's row count minus the header row.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    /// Echo of the caller's query identifier
    pub ref_id: String,
    pub fields: Vec<Field>,
    pub meta: FrameMeta,
}

impl Frame {
    /// Row count shared by every field vector.
    pub fn row_count(&self) -> usize {
        self.fields.first().map(|field| field.values.len()).unwrap_or(0)
    }

    /// Field lookup by resolved column name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }
}
