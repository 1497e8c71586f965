use crate::grid::cell::Cell;
use crate::grid::cell::TypeTag;
use crate::grid::Grid;
use std::collections::HashSet;

/// Accumulates cell classifications for one column and resolves them into
/// a single schema. Any disagreement across the column's data rows forces
/// the text fallback: a single dissenting cell defeats the majority, so a
/// stray text value is never silently dropped from a numeric column. The
/// unit is part of a cell's identity here, so a dollar cell and a percent
/// cell disagree even though both are numeric; the column then keeps each
/// cell's own formatted rendering instead of picking one unit.
#[derive(Clone, Debug)]
pub struct ColumnProfile {
    /// Resolved column name from the header row
    pub header: String,
    /// 0-based column index in the grid
    pub column_index: usize,
    /// Distinct (type, unit) classifications observed across the data rows
    observed: HashSet<(TypeTag, Option<&'static str>)>,
}

impl ColumnProfile {
    pub fn new(header: String, column_index: usize) -> Self {
        ColumnProfile {
            header,
            column_index,
            observed: HashSet::new(),
        }
    }

    /// Builds a profile by observing every data row of the grid at this
    /// column. Cells missing from short rows are not observed.
    pub fn scan(header: String, column_index: usize, grid: &Grid) -> Self {
        let mut profile = Self::new(header, column_index);
        for row in grid.data_rows() {
            if let Some(cell) = row.get(column_index) {
                profile.observe(cell);
            }
        }
        profile
    }

    /// Folds one cell's classification into the accumulated set. Blank
    /// unformatted cells carry no evidence and are skipped.
    pub fn observe(&mut self, cell: &Cell) {
        if cell.is_blank() {
            return;
        }
        self.observed.insert(cell.classify());
    }

    /// The single observed type, or the text fallback on conflict or when
    /// the column held no classifiable cells at all.
    pub fn resolved_type(&self) -> TypeTag {
        match self.observed.iter().next() {
            Some((tag, _)) if self.observed.len() == 1 => *tag,
            _ => TypeTag::String,
        }
    }

    /// The single observed unit, or none when the cells disagree.
    pub fn resolved_unit(&self) -> Option<&'static str> {
        match self.observed.iter().next() {
            Some((_, unit)) if self.observed.len() == 1 => *unit,
            _ => None,
        }
    }

    /// True when at least two distinct classifications were observed.
    pub fn has_mixed_types(&self) -> bool {
        self.observed.len() > 1
    }

    /// True when at least two distinct units were observed.
    pub fn has_mixed_units(&self) -> bool {
        self.units().len() > 1
    }

    fn units(&self) -> HashSet<Option<&'static str>> {
        self.observed.iter().map(|(_, unit)| *unit).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::cell::NumberFormatKind;

    #[test]
    fn uniform_column_resolves_to_observed_type() {
        let mut profile = ColumnProfile::new("Amount".to_owned(), 0);
        profile.observe(&Cell::number(1.0, NumberFormatKind::Number, ""));
        profile.observe(&Cell::number(2.0, NumberFormatKind::Number, ""));
        assert_eq!(profile.resolved_type(), TypeTag::Number);
        assert_eq!(profile.resolved_unit(), None);
        assert!(!profile.has_mixed_types());
    }

    #[test]
    fn single_dissenting_cell_forces_string() {
        let mut profile = ColumnProfile::new("Amount".to_owned(), 0);
        for _ in 0..10 {
            profile.observe(&Cell::number(1.0, NumberFormatKind::Number, ""));
        }
        profile.observe(&Cell::text("n/a"));
        assert_eq!(profile.resolved_type(), TypeTag::String);
        assert!(profile.has_mixed_types());
    }

    #[test]
    fn mixed_currency_symbols_fall_back_to_text() {
        let mut profile = ColumnProfile::new("Price".to_owned(), 0);
        profile.observe(&Cell::number(1.0, NumberFormatKind::Currency, "$0.00"));
        profile.observe(&Cell::number(2.0, NumberFormatKind::Currency, "£0.00"));
        assert_eq!(profile.resolved_type(), TypeTag::String);
        assert_eq!(profile.resolved_unit(), None);
        assert!(profile.has_mixed_units());
        assert!(profile.has_mixed_types());
    }

    #[test]
    fn currency_against_percent_falls_back_to_text() {
        let mut profile = ColumnProfile::new("Change".to_owned(), 0);
        profile.observe(&Cell::number(1.0, NumberFormatKind::Currency, "$0.00"));
        profile.observe(&Cell::number(0.05, NumberFormatKind::Percent, "0.00%"));
        assert_eq!(profile.resolved_type(), TypeTag::String);
        assert_eq!(profile.resolved_unit(), None);
        assert!(profile.has_mixed_types());
        assert!(profile.has_mixed_units());
    }

    #[test]
    fn unitless_dissenter_only_flags_types() {
        let mut profile = ColumnProfile::new("When".to_owned(), 0);
        profile.observe(&Cell::date("2024-01-01"));
        profile.observe(&Cell::text("n/a"));
        assert_eq!(profile.resolved_type(), TypeTag::String);
        assert!(profile.has_mixed_types());
        assert!(!profile.has_mixed_units());
    }

    #[test]
    fn uniform_unit_survives() {
        let mut profile = ColumnProfile::new("Rate".to_owned(), 0);
        profile.observe(&Cell::number(0.1, NumberFormatKind::Percent, "0%"));
        profile.observe(&Cell::number(0.2, NumberFormatKind::Percent, "0%"));
        assert_eq!(profile.resolved_unit(), Some("percent"));
    }

    #[test]
    fn blank_cells_are_ignored() {
        let mut profile = ColumnProfile::new("Amount".to_owned(), 0);
        profile.observe(&Cell::number(1.0, NumberFormatKind::Number, ""));
        profile.observe(&Cell::default());
        profile.observe(&Cell::text("  "));
        assert_eq!(profile.resolved_type(), TypeTag::Number);
        assert!(!profile.has_mixed_types());
    }

    #[test]
    fn empty_column_falls_back_to_string() {
        let profile = ColumnProfile::new("Empty".to_owned(), 3);
        assert_eq!(profile.resolved_type(), TypeTag::String);
        assert_eq!(profile.resolved_unit(), None);
    }
}
