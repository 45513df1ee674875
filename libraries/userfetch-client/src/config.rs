//! Fetcher configuration.

use std::time::Duration;

/// Public JSONPlaceholder users endpoint.
pub const DEFAULT_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for a [`UserFetcher`](crate::UserFetcher).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    /// Endpoint returning a JSON array of users
    pub url: String,
    /// Upper bound for the whole request, body included
    pub timeout: Duration,
}

impl FetcherConfig {
    /// Create a config for the given endpoint with the default timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Replace the timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self::new(DEFAULT_URL)
    }
}
