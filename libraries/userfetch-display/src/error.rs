//! Error types for exporting records.

use thiserror::Error;

/// Errors that can occur when saving records to disk.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Nothing was fetched, so there is nothing to save
    #[error("No user data to save")]
    NoData,

    /// IO error while writing the file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Records could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;
