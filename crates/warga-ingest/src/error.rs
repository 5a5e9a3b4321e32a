//! Error types for registry CSV ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading the input artifact.
///
/// These are the fatal input conditions: anything below the file
/// level (missing cells, bad values) is handled by the transform
/// stage and never surfaces here.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input CSV not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the input file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV content.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file has no rows at all.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// Header row missing or entirely blank.
    #[error("could not detect header row in {path}")]
    NoHeaderDetected { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
