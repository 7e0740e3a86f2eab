//! Error types for CSV I/O

use thiserror::Error;

/// Errors raised by the CSV readers and writers
#[derive(Debug, Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to open file: {0}")]
    OpenFailed(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Required column not found: {0}")]
    MissingColumn(String),

    #[error("Failed to write file: {0}")]
    WriteFailed(String),
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;
