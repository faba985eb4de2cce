//! Error types for the persistence layer.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or saving bot data.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Failed to read a file.
    #[error("failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write a file.
    #[error("failed to write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to create a directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON serialization or deserialization failed.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The roster workbook could not be opened or parsed.
    #[error("failed to read roster workbook {path}: {message}")]
    WorkbookError { path: PathBuf, message: String },

    /// The roster workbook has no worksheet.
    #[error("roster workbook {path} has no worksheet")]
    NoWorksheet { path: PathBuf },

    /// A required roster column is missing from the header row.
    #[error("roster is missing required column '{column}'")]
    MissingColumn { column: &'static str },
}

/// Result type for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;
