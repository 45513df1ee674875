//! Output formats.

use std::fmt;
use std::str::FromStr;

/// How records are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Indented block per user, including phone and company
    #[default]
    Pretty,
    /// Name, username, email and city only
    Minimal,
    /// JSON array of objects
    Json,
    /// Quoted CSV with a header row
    Csv,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Pretty => "pretty",
            OutputFormat::Minimal => "minimal",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }

    /// Text formats carry banners and section headers; machine formats don't.
    pub fn is_text(&self) -> bool {
        matches!(self, OutputFormat::Pretty | OutputFormat::Minimal)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(OutputFormat::Pretty),
            "minimal" => Ok(OutputFormat::Minimal),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!(
                "unknown format '{}' (expected pretty, minimal, json or csv)",
                other
            )),
        }
    }
}
