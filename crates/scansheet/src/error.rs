//! Error types for the scansheet library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for scansheet operations.
#[derive(Debug, Error)]
pub enum ScansheetError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input text that is not a valid delimited table.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Empty file or no rows to work with.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Backing store unreadable or unwritable.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Capture device unavailable or denied.
    #[error("Device error: {0}")]
    Device(String),

    /// Contract violation surfaced to a caller.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for scansheet operations.
pub type Result<T> = std::result::Result<T, ScansheetError>;
