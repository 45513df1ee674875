/// Application configuration
///
/// Layers, lowest priority first: built-in defaults, optional TOML file,
/// `USERFETCH_` environment variables, command-line flags.
use crate::cli::Cli;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use userfetch_client::{FetcherConfig, DEFAULT_TIMEOUT, DEFAULT_URL};
use userfetch_display::OutputFormat;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default = "default_fetcher")]
    pub fetcher: FetcherSettings,

    #[serde(default = "default_display")]
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FetcherSettings {
    #[serde(default = "default_url")]
    pub url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DisplaySettings {
    #[serde(default = "default_prefix")]
    pub prefix: String,

    #[serde(default = "default_format")]
    pub format: String,

    #[serde(default)]
    pub limit: Option<usize>,
}

impl AppConfig {
    /// Load configuration from an optional file and the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        if let Some(path) = path {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            settings = settings.add_source(config::File::from(path));
        }

        // USERFETCH_FETCHER__TIMEOUT_SECS=5 -> fetcher.timeout_secs
        settings = settings.add_source(
            config::Environment::with_prefix("USERFETCH")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        settings
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Apply command-line overrides
    pub fn merge_cli(&mut self, cli: &Cli) {
        if let Some(url) = &cli.url {
            self.fetcher.url.clone_from(url);
        }
        if let Some(timeout) = cli.timeout {
            self.fetcher.timeout_secs = timeout;
        }
        if let Some(prefix) = &cli.prefix {
            self.display.prefix.clone_from(prefix);
        }
        if let Some(format) = cli.format {
            self.display.format = format.to_string();
        }
        if cli.limit.is_some() {
            self.display.limit = cli.limit;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.fetcher.url.trim().is_empty() {
            bail!("Endpoint URL is required (set USERFETCH_FETCHER__URL or --url)");
        }

        if self.fetcher.timeout_secs == 0 {
            bail!("Timeout must be at least 1 second");
        }

        if self.display.prefix.is_empty() {
            bail!("City prefix cannot be empty");
        }

        if self.display.limit == Some(0) {
            bail!("Limit must be at least 1");
        }

        self.output_format()?;

        Ok(())
    }

    pub fn output_format(&self) -> Result<OutputFormat> {
        self.display
            .format
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))
    }

    pub fn fetcher_config(&self) -> FetcherConfig {
        FetcherConfig::new(self.fetcher.url.clone())
            .with_timeout(Duration::from_secs(self.fetcher.timeout_secs))
    }
}

// Default values
fn default_fetcher() -> FetcherSettings {
    FetcherSettings {
        url: default_url(),
        timeout_secs: default_timeout_secs(),
    }
}

fn default_url() -> String {
    DEFAULT_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

fn default_display() -> DisplaySettings {
    DisplaySettings {
        prefix: default_prefix(),
        format: default_format(),
        limit: None,
    }
}

fn default_prefix() -> String {
    "S".to_string()
}

fn default_format() -> String {
    OutputFormat::default().to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fetcher: default_fetcher(),
            display: default_display(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Mutex, MutexGuard};

    // Tests that read the process environment run one at a time
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Sets environment variables and removes them again on drop.
    struct EnvVars(Vec<&'static str>);

    impl EnvVars {
        fn set(vars: &[(&'static str, &str)]) -> Self {
            for (key, value) in vars {
                std::env::set_var(key, value);
            }
            Self(vars.iter().map(|(key, _)| *key).collect())
        }
    }

    impl Drop for EnvVars {
        fn drop(&mut self) {
            for key in &self.0 {
                std::env::remove_var(key);
            }
        }
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.fetcher.url, DEFAULT_URL);
        assert_eq!(config.fetcher.timeout_secs, 10);
        assert_eq!(config.display.prefix, "S");
        assert_eq!(config.output_format().unwrap(), OutputFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let _lock = env_lock();
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[fetcher]
url = "http://localhost:9000/users"

[display]
prefix = "G"
format = "minimal"
"#
        )
        .unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.fetcher.url, "http://localhost:9000/users");
        assert_eq!(config.fetcher.timeout_secs, 10);
        assert_eq!(config.display.prefix, "G");
        assert_eq!(config.output_format().unwrap(), OutputFormat::Minimal);
    }

    #[test]
    fn test_environment_overrides() {
        let _lock = env_lock();
        let _vars = EnvVars::set(&[
            ("USERFETCH_DISPLAY__PREFIX", "G"),
            ("USERFETCH_FETCHER__TIMEOUT_SECS", "5"),
        ]);

        let config = AppConfig::load(None).unwrap();

        assert_eq!(config.display.prefix, "G");
        assert_eq!(config.fetcher.timeout_secs, 5);
        assert_eq!(config.fetcher_config().timeout, Duration::from_secs(5));
        assert_eq!(config.fetcher.url, DEFAULT_URL);
        assert_eq!(config.display.format, "pretty");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = AppConfig::load(Some(Path::new("/nonexistent/userfetch.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = AppConfig::default();
        let cli = Cli {
            url: Some("http://localhost:1234/users".into()),
            timeout: Some(2),
            prefix: Some("r".into()),
            format: Some(OutputFormat::Csv),
            limit: Some(3),
            ..Cli::default()
        };

        config.merge_cli(&cli);

        assert_eq!(config.fetcher.url, "http://localhost:1234/users");
        assert_eq!(config.fetcher_config().timeout, Duration::from_secs(2));
        assert_eq!(config.display.prefix, "r");
        assert_eq!(config.output_format().unwrap(), OutputFormat::Csv);
        assert_eq!(config.display.limit, Some(3));
    }

    #[test]
    fn test_validation_failures() {
        let mut config = AppConfig::default();
        config.display.prefix = String::new();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.fetcher.timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.display.format = "yaml".into();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.display.limit = Some(0);
        assert!(config.validate().is_err());
    }
}
