use serde::Deserialize;
use serde::Serialize;

/// Number format reported for a cell by the spreadsheet service.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NumberFormatKind {
    /// No number formatting applied
    #[default]
    None,
    /// Calendar date
    Date,
    /// Calendar date with time of day
    DateTime,
    /// Plain numeric formatting
    Number,
    /// Percentage formatting
    Percent,
    /// Currency formatting
    Currency,
}

/// Semantic type inferred for a cell, and resolved for a whole column.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Date or date/time values
    Time,
    /// Numeric values
    Number,
    /// Text values, also the fallback for mixed columns
    String,
}

/// Currency symbols and abbreviations recognized inside number format
/// patterns, mapped to the unit codes the charting layer understands.
/// Longer symbols come first so that "R$" wins over "R" and "$".
const CURRENCIES: [(&str, &str); 14] = [
    ("R$", "currencyBRL"),
    ("kr", "currencySEK"),
    ("zł", "currencyPLN"),
    ("$", "currencyUSD"),
    ("£", "currencyGBP"),
    ("€", "currencyEUR"),
    ("¥", "currencyJPY"),
    ("₽", "currencyRUB"),
    ("₹", "currencyINR"),
    ("₩", "currencyKRW"),
    ("฿", "currencyTHB"),
    ("₺", "currencyTRY"),
    ("元", "currencyCNY"),
    ("R", "currencyZAR"),
];

/// Unit code for the first recognized currency symbol in a format pattern.
fn currency_unit(pattern: &str) -> Option<&'static str> {
    CURRENCIES
        .iter()
        .find(|(symbol, _)| pattern.contains(*symbol))
        .map(|(_, unit)| *unit)
}

/// A single grid position as fetched from the spreadsheet service.
/// Immutable once fetched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Cell {
    /// Text as rendered by the spreadsheet UI
    pub formatted_value: String,
    /// Effective numeric value, when the cell holds one
    pub numeric_value: Option<f64>,
    /// Number format kind reported by the service
    pub number_format: NumberFormatKind,
    /// Raw number format pattern, scanned for currency symbols
    pub format_pattern: String,
}

impl Cell {
    /// Plain text cell without number formatting.
    pub fn text(value: &str) -> Self {
        Cell {
            formatted_value: value.to_owned(),
            ..Cell::default()
        }
    }

    /// Numeric cell with the given format kind and pattern.
    pub fn number(value: f64, format: NumberFormatKind, pattern: &str) -> Self {
        Cell {
            formatted_value: value.to_string(),
            numeric_value: Some(value),
            number_format: format,
            format_pattern: pattern.to_owned(),
        }
    }

    /// Date formatted cell rendering the given text.
    pub fn date(formatted: &str) -> Self {
        Cell {
            formatted_value: formatted.to_owned(),
            number_format: NumberFormatKind::Date,
            ..Cell::default()
        }
    }

    /// Classifies the cell into a semantic type and an optional unit from
    /// its number format metadata. Never fails; cells without a
    /// recognized format read as text.
    pub fn classify(&self) -> (TypeTag, Option<&'static str>) {
        match self.number_format {
            NumberFormatKind::Date | NumberFormatKind::DateTime => (TypeTag::Time, None),
            NumberFormatKind::Percent => (TypeTag::Number, Some("percent")),
            NumberFormatKind::Number | NumberFormatKind::Currency => {
                (TypeTag::Number, currency_unit(&self.format_pattern))
            }
            NumberFormatKind::None => (TypeTag::String, None),
        }
    }

    /// True when the cell carries neither number format metadata nor any
    /// formatted text. Blank cells contribute no evidence to a column's
    /// profile, so a stray empty cell cannot drag a typed column to text.
    pub fn is_blank(&self) -> bool {
        self.number_format == NumberFormatKind::None && self.formatted_value.trim().is_empty()
    }
}
