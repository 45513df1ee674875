//! Error types for the user fetcher.

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while fetching users.
///
/// Every variant is terminal for a run; nothing is retried.
#[derive(Error, Debug)]
pub enum FetchError {
    /// DNS failure, refused or reset connection, or any other transport error
    #[error("Failed to connect to the API: {0}")]
    Connection(String),

    /// The request did not complete within the configured timeout
    #[error("Request timed out after {}s", .timeout.as_secs_f64())]
    Timeout { timeout: Duration },

    /// Server answered with a status outside the success range
    #[error("HTTP error occurred: status {status}")]
    Http { status: u16 },

    /// Response body was not a JSON array
    #[error("Failed to parse JSON response: {0}")]
    Parse(String),

    /// Invalid endpoint URL
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),

    /// The underlying HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl FetchError {
    /// HTTP status code carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;
