use thiserror::Error;

/// Fatal transform failures. There is no recoverable schema to infer in
/// these cases, so no partial frame is produced; every other anomaly is
/// downgraded to a warning on the resulting frame instead.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// The fetched range contains no rows at all
    #[error("Empty spreadsheet range or missing data")]
    EmptyGrid,

    /// Header row expected but not found
    #[error("Missing header row")]
    MissingHeaderRow,
}
