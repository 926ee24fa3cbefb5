//! Error types for csvtable
//!
//! The tokenizer is total over decoded text, so every variant here comes from
//! acquiring that text.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for csvtable operations
pub type Result<T> = std::result::Result<T, CsvError>;

/// Errors raised while obtaining CSV text
#[derive(Error, Debug)]
pub enum CsvError {
    /// The source file does not exist
    #[error("CSV source not found: {}", .path.display())]
    SourceNotFound { path: PathBuf },

    /// An empty path was supplied
    #[error("Missing path to CSV source")]
    MissingPath,

    /// The source exists but is not valid UTF-8
    #[error("CSV source is not valid UTF-8: {}", .path.display())]
    InvalidEncoding { path: PathBuf },

    /// Any other I/O failure while reading the source
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CsvError {
    /// Check whether this error means the source was not found
    pub fn is_source_not_found(&self) -> bool {
        matches!(self, CsvError::SourceNotFound { .. })
    }

    /// Map an I/O error raised while reading `path` into a `CsvError`
    pub(crate) fn from_io(err: io::Error, path: impl Into<PathBuf>) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => CsvError::SourceNotFound { path: path.into() },
            io::ErrorKind::InvalidData => CsvError::InvalidEncoding { path: path.into() },
            _ => CsvError::Io(err),
        }
    }
}
