//! Data layer errors, wrapping csv and IO errors.

use thiserror::Error;

/// Data access errors.
///
/// Per-record problems never surface here - the loader logs and skips
/// them. These errors are structural: unreadable files, malformed CSV,
/// or a write-back target without the expected columns.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing column '{column}' in {path}")]
    MissingColumn { column: String, path: String },
}

/// Result type alias with DataError
pub type DataResult<T> = Result<T, DataError>;
