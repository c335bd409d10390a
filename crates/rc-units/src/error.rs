//! Unit table errors.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for loading a unit table.
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type for lookups against a loaded table.
pub type TableResult<T> = Result<T, TableError>;

/// Errors that can occur while loading a unit table.
///
/// All of these are fatal at startup: without units there is nothing to show.
/// Row-level variants carry the 1-based line number in the source.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Backing file does not exist.
    #[error("unit table not found: {path}")]
    NotFound { path: PathBuf },

    /// Backing file exists but could not be read.
    #[error("failed to read unit table {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV-level failure (invalid UTF-8, broken quoting).
    #[error("CSV error at line {line}: {message}")]
    Csv { line: u64, message: String },

    /// Wrong column count, empty name or non-numeric factor.
    #[error("malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    /// Header present but no data rows.
    #[error("unit table has no data rows")]
    Empty,

    /// Same unit name appears twice.
    #[error("duplicate unit '{name}' at line {line} (first defined at line {first_line})")]
    DuplicateUnit {
        name: String,
        line: u64,
        first_line: u64,
    },

    /// Factor parsed but is zero, negative or non-finite.
    #[error("unit '{name}' at line {line} has non-positive factor {value}")]
    NonPositiveFactor { name: String, line: u64, value: f64 },
}

impl LoadError {
    /// Line of the offending row, if the error is tied to one.
    pub fn line(&self) -> Option<u64> {
        match self {
            Self::Csv { line, .. }
            | Self::MalformedRow { line, .. }
            | Self::DuplicateUnit { line, .. }
            | Self::NonPositiveFactor { line, .. } => Some(*line),
            Self::NotFound { .. } | Self::Read { .. } | Self::Empty => None,
        }
    }
}

/// Errors from lookups against a loaded table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Name is not a key of the table. Selectors are populated from the
    /// table, so reaching this through the UI is a programming error.
    #[error("unknown unit '{name}'")]
    UnknownUnit { name: String },
}
