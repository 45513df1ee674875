//! userfetch - fetch users from a JSON endpoint and print them
//!
//! The binary is a thin wrapper: it parses [`cli::Cli`], loads
//! [`config::AppConfig`], builds a fetcher and hands it to [`app::run`].

pub mod app;
pub mod cli;
pub mod config;
