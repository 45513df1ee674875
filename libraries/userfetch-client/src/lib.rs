//! userfetch client
//!
//! HTTP client library for the JSONPlaceholder `/users` endpoint.
//!
//! # Features
//!
//! - **Fetching**: one GET request with a configurable timeout
//! - **Classified failures**: connection, timeout, HTTP status and parse errors
//! - **Lenient records**: every user field degrades to a placeholder on its own
//!
//! # Example
//!
//! ```ignore
//! use userfetch_client::{FetcherConfig, UserFetcher};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let fetcher = UserFetcher::new(FetcherConfig::default())?;
//!
//!     let users = fetcher.fetch_users().await?;
//!     for user in &users {
//!         println!("{} lives in {}", user.name(), user.city());
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod types;

pub use client::{UserFetcher, UserSource};
pub use config::{FetcherConfig, DEFAULT_TIMEOUT, DEFAULT_URL};
pub use error::{FetchError, Result};
pub use types::{UserRecord, PLACEHOLDER};
