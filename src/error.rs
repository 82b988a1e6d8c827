//! Error types for the payout report pipeline.

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Fatal errors. Any of these aborts the run without emitting a report.
#[derive(Error, Debug)]
pub enum ReportError {
    /// No usable input path was supplied
    #[error("No valid input files provided.")]
    NoInputFiles,

    /// An input file could not be opened
    #[error("Failed to open {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input stream could not be read as UTF-8 CSV
    #[error("Failed to read {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The header has none of the accepted rate column names
    #[error("Missing rate column in file: {}", .path.display())]
    MissingRateColumn { path: PathBuf },

    /// Report type not present in the registry
    #[error("Unknown report type: {0}")]
    UnknownReportType(String),

    /// Failed to write the rendered report
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Per-row failures. These are logged and the row is dropped; they never
/// abort a read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("missing field '{0}'")]
    MissingField(String),

    #[error("invalid integer '{value}' in field '{field}': {source}")]
    InvalidInteger {
        field: String,
        value: String,
        #[source]
        source: ParseIntError,
    },
}
