//! Error types for xlsx2csvlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while converting a workbook to CSV.
///
/// Callers that only need a single "conversion failed" outcome can rely on
/// the `Display` output, which always names the underlying cause.
#[derive(Error, Debug)]
pub enum ConversionError {
    /// Input workbook does not exist
    #[error("input file does not exist: {0}")]
    InputNotFound(PathBuf),

    /// Workbook could not be opened or parsed
    #[error("failed to read workbook '{path}': {source}")]
    Workbook {
        path: PathBuf,
        source: calamine::Error,
    },

    /// Workbook has no sheets to convert
    #[error("workbook has no sheets: {0}")]
    NoSheets(PathBuf),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConversionError {
    pub(crate) fn workbook(path: impl Into<PathBuf>, source: impl Into<calamine::Error>) -> Self {
        ConversionError::Workbook {
            path: path.into(),
            source: source.into(),
        }
    }
}
