use crate::frame::column::ColumnProfile;
use crate::frame::naming::cell_position;
use crate::frame::Field;
use crate::frame::FieldValues;
use crate::frame::Frame;
use crate::frame::FrameMeta;
use crate::grid::Grid;
use crate::transform::QueryModel;
use chrono::NaiveDate;
use chrono::NaiveDateTime;

/// Date/time renderings attempted for time cells, most specific first.
const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

/// Date-only renderings, completed to midnight.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

/// Parses a cell's formatted text as a local date or date/time, trying
/// the common spreadsheet renderings in order.
pub(crate) fn parse_local_datetime(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(text, format) {
            return Some(datetime);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Builds the typed frame from a grid and its resolved column profiles,
/// collecting per-cell warnings along the way.
pub(crate) struct FrameBuilder<'a> {
    grid: &'a Grid,
    profiles: Vec<ColumnProfile>,
    query: &'a QueryModel,
    hit: bool,
    warnings: Vec<String>,
}

impl<'a> FrameBuilder<'a> {
    pub(crate) fn new(
        grid: &'a Grid,
        profiles: Vec<ColumnProfile>,
        query: &'a QueryModel,
        hit: bool,
    ) -> Self {
        FrameBuilder {
            grid,
            profiles,
            query,
            hit,
            warnings: Vec::new(),
        }
    }

    pub(crate) fn build(mut self) -> Frame {
        let profiles = std::mem::take(&mut self.profiles);
        let mut fields = Vec::with_capacity(profiles.len());
        for profile in &profiles {
            fields.push(self.populate(profile));
        }
        for profile in &profiles {
            if profile.has_mixed_types() {
                self.warnings.push(format!(
                    "Multiple data types found in column {:?}; using string data type",
                    profile.header
                ));
            }
            if profile.has_mixed_units() {
                self.warnings.push(format!(
                    "Multiple units found in column {:?}; the formatted value will be used",
                    profile.header
                ));
            }
        }
        Frame {
            ref_id: self.query.ref_id.clone(),
            fields,
            meta: FrameMeta {
                spreadsheet_id: self.query.spreadsheet_id.clone(),
                range: self.query.range.clone(),
                hit: self.hit,
                warnings: self.warnings,
            },
        }
    }

    /// Fills one column vector from the grid's data rows. Cells missing
    /// from short rows leave their slot null.
    fn populate(&mut self, profile: &ColumnProfile) -> Field {
        let mut values = FieldValues::nulls(profile.resolved_type(), self.grid.data_row_count());
        for (slot, row) in self.grid.data_rows().iter().enumerate() {
            let Some(cell) = row.get(profile.column_index) else {
                continue;
            };
            match &mut values {
                FieldValues::Time(slots) => {
                    if cell.formatted_value.trim().is_empty() {
                        continue;
                    }
                    match parse_local_datetime(&cell.formatted_value) {
                        Some(datetime) => slots[slot] = Some(datetime),
                        None => self.warnings.push(format!(
                            "Could not parse {:?} as a date at {} in column {:?}",
                            cell.formatted_value,
                            cell_position(slot + 1, profile.column_index),
                            profile.header
                        )),
                    }
                }
                FieldValues::Number(slots) => slots[slot] = cell.numeric_value,
                FieldValues::String(slots) => slots[slot] = Some(cell.formatted_value.clone()),
            }
        }
        Field {
            name: profile.header.clone(),
            unit: profile.resolved_unit().map(str::to_owned),
            values,
        }
    }
}
