use std::io;
use thiserror::Error;

use megacna_core::CnaError;

/// Error type for megacna-io operations.
#[derive(Error, Debug)]
pub enum ParseError {
    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A value that must be numeric could not be parsed.
    #[error("Invalid numeric data for `{field}`: {value:?}")]
    InvalidNumeric { field: String, value: String },

    /// The copy number list had no numeric entry.
    #[error("No valid copy numbers found")]
    NoCopyNumbers,

    /// A copy number was not a whole number.
    #[error("Copy number must be a whole number, got {0}")]
    InvalidCopyNumber(f64),

    /// A required column is missing from a table header.
    #[error("Missing required column `{0}`")]
    MissingColumn(String),

    /// Malformed row or invalid model parameters.
    #[error(transparent)]
    Core(#[from] CnaError),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for megacna-io operations.
pub type Result<T> = std::result::Result<T, ParseError>;

pub(crate) fn invalid_record(row: usize, reason: impl Into<String>) -> ParseError {
    ParseError::Core(CnaError::InvalidRecord {
        row,
        reason: reason.into(),
    })
}
