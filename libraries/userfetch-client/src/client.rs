//! HTTP client for the users endpoint.

use crate::config::FetcherConfig;
use crate::error::{FetchError, Result};
use crate::types::UserRecord;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Anything that can produce the list of users for one run.
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetch every user record, in the order the source returns them.
    async fn fetch_users(&self) -> Result<Vec<UserRecord>>;
}

/// Fetches user records from a JSON endpoint.
///
/// # Example
///
/// ```ignore
/// use userfetch_client::{FetcherConfig, UserFetcher};
///
/// let fetcher = UserFetcher::new(FetcherConfig::default())?;
/// let users = fetcher.fetch_users().await?;
/// println!("Fetched {} users", users.len());
/// ```
pub struct UserFetcher {
    http: Client,
    config: FetcherConfig,
}

impl UserFetcher {
    /// Create a new fetcher with the given configuration.
    pub fn new(config: FetcherConfig) -> Result<Self> {
        if config.url.trim().is_empty() {
            return Err(FetchError::InvalidUrl("URL cannot be empty".into()));
        }

        let parsed = Url::parse(config.url.trim())
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", config.url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FetchError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .user_agent(format!("userfetch/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::ClientBuild)?;

        Ok(Self {
            http,
            config: FetcherConfig {
                url: parsed.to_string(),
                timeout: config.timeout,
            },
        })
    }

    /// Get the endpoint URL.
    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// Get the request timeout.
    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    /// Fetch all users with a single GET request.
    ///
    /// An empty array is a valid, empty result.
    pub async fn fetch_users(&self) -> Result<Vec<UserRecord>> {
        debug!(url = %self.config.url, timeout = ?self.config.timeout, "Fetching users");

        let response = self
            .http
            .get(&self.config.url)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), "Users endpoint returned an error");
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| self.classify(e))?;
        let users: Vec<UserRecord> = serde_json::from_slice(&body)
            .map_err(|e| FetchError::Parse(format!("expected an array of users: {}", e)))?;

        if users.is_empty() {
            info!("API returned an empty list of users");
        } else {
            info!(count = users.len(), "Fetched users");
        }

        Ok(users)
    }

    fn classify(&self, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            debug!(timeout = ?self.config.timeout, "Request timed out");
            FetchError::Timeout {
                timeout: self.config.timeout,
            }
        } else if e.is_decode() {
            FetchError::Parse(e.to_string())
        } else {
            debug!(error = %e, "Request failed");
            FetchError::Connection(e.to_string())
        }
    }
}

#[async_trait]
impl UserSource for UserFetcher {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>> {
        UserFetcher::fetch_users(self).await
    }
}
