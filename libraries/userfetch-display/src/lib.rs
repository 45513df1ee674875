//! Presentation layer for fetched user records.
//!
//! Rendering to any [`std::io::Write`] sink, the case-insensitive city prefix
//! filter, substring search, per-city statistics and file export.

pub mod error;
pub mod export;
pub mod filter;
pub mod format;
pub mod presenter;
pub mod stats;

pub use error::{ExportError, Result};
pub use export::save_to_file;
pub use filter::{city_starts_with, filter_by_city_prefix, search_users, SearchField};
pub use format::OutputFormat;
pub use presenter::Presenter;
pub use stats::Statistics;
