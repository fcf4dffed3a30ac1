use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while converting a CSV file to JSON.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The input path does not exist.
    #[error("input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Reading or writing a file failed for a reason other than a missing input.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input holds no data at all.
    #[error("no columns to parse from '{}': file is empty", path.display())]
    EmptyFile { path: PathBuf },

    /// The content is not valid delimited text.
    #[error("CSV parse error in '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A required header column is absent.
    #[error("CSV missing '{column}' column")]
    MissingColumn { column: &'static str },

    /// A coordinate cell could not be read as a number.
    #[error("row {row}, column '{column}': '{value}' is not a number")]
    InvalidNumber {
        row: usize,
        column: &'static str,
        value: String,
    },

    /// The pixel CSV does not have the fixed number of data rows.
    #[error("CSV must have exactly {expected} rows (excluding header), found {actual}")]
    RowCount { expected: usize, actual: usize },

    /// JSON encoding failed.
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
