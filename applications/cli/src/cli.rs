/// Command-line arguments
use clap::Parser;
use std::path::PathBuf;
use userfetch_display::{OutputFormat, SearchField};

#[derive(Parser, Debug, Default)]
#[command(name = "userfetch", version)]
#[command(about = "Fetch and display user data from the JSONPlaceholder API", long_about = None)]
#[command(after_help = "Examples:
  userfetch                          Display all users, then those from cities starting with 'S'
  userfetch --prefix g               Filter on cities starting with 'G' instead
  userfetch --format json            Output in JSON format
  userfetch --limit 5                Show at most 5 users per listing
  userfetch --stats                  Show statistics
  userfetch --search \"New York\" --search-field city
  userfetch --save output.json       Save data to file (JSON or CSV by extension)")]
pub struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Users endpoint URL
    #[arg(long)]
    pub url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// City prefix for the filtered listing
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// Output format: pretty, minimal, json or csv
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Maximum number of users per listing
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Only keep users whose search field contains this text
    #[arg(long)]
    pub search: Option<String>,

    /// Field to search in: name, username, email or city
    #[arg(long, default_value_t = SearchField::Name)]
    pub search_field: SearchField,

    /// Show statistics
    #[arg(long)]
    pub stats: bool,

    /// Save data to file (JSON if the name ends in .json, CSV otherwise)
    #[arg(long)]
    pub save: Option<PathBuf>,
}
