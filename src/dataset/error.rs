//! Dataset error types
//!
//! Every variant is fatal: the dashboard does not start without its data.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the launch dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The file could not be opened or read
    #[error("Failed to read dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required column is absent from the header row
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A row could not be parsed into a launch record
    #[error("Invalid record on line {line}: {message}")]
    InvalidRecord { line: usize, message: String },

    /// Header or framing error from the CSV reader
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The file has a header but no rows
    #[error("Dataset contains no launch records")]
    Empty,
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
