/// The fetch-and-display pipeline
use crate::cli::Cli;
use crate::config::AppConfig;
use anyhow::Result;
use std::io::{self, Write};
use std::path::PathBuf;
use userfetch_client::{FetchError, UserRecord, UserSource};
use userfetch_display::presenter::{NO_MATCHES, NO_USERS};
use userfetch_display::{
    filter_by_city_prefix, save_to_file, search_users, OutputFormat, Presenter, SearchField,
    Statistics,
};

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "userfetch=warn,userfetch_client=warn,userfetch_display=warn";

pub const EXIT_OK: u8 = 0;
pub const EXIT_FETCH_FAILED: u8 = 1;
pub const EXIT_CONFIG: u8 = 2;

/// Everything one run needs besides the user source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub prefix: String,
    pub format: OutputFormat,
    pub limit: Option<usize>,
    pub search: Option<(String, SearchField)>,
    pub stats: bool,
    pub save: Option<PathBuf>,
}

impl RunOptions {
    pub fn new(config: &AppConfig, cli: &Cli) -> Result<Self> {
        Ok(Self {
            prefix: config.display.prefix.clone(),
            format: config.output_format()?,
            limit: config.display.limit,
            search: cli.search.clone().map(|query| (query, cli.search_field)),
            stats: cli.stats,
            save: cli.save.clone(),
        })
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            prefix: "S".to_string(),
            format: OutputFormat::default(),
            limit: None,
            search: None,
            stats: false,
            save: None,
        }
    }
}

/// Human-readable message for a failed fetch.
pub fn fetch_error_message(err: &FetchError) -> String {
    match err {
        FetchError::Connection(_) => {
            "Failed to connect to the API. Please check your internet connection.".to_string()
        }
        FetchError::Timeout { timeout } => format!(
            "Request timed out after {}s. Please check your internet connection.",
            timeout.as_secs_f64()
        ),
        FetchError::Http { status } => format!("HTTP error occurred: status {}", status),
        FetchError::Parse(detail) => format!("Failed to parse JSON response: {}", detail),
        FetchError::InvalidUrl(_) | FetchError::ClientBuild(_) => err.to_string(),
    }
}

/// Fetch users and render them, returning the process exit code.
///
/// Nothing is written to `out` when the fetch fails.
pub async fn run<S, W, E>(source: &S, options: &RunOptions, out: W, err: &mut E) -> u8
where
    S: UserSource + ?Sized,
    W: Write,
    E: Write,
{
    let users = match source.fetch_users().await {
        Ok(users) => users,
        Err(e) => {
            tracing::debug!(error = %e, "Fetch failed");
            let _ = writeln!(err, "Error: {}", fetch_error_message(&e));
            return EXIT_FETCH_FAILED;
        }
    };

    let mut presenter = Presenter::new(out, options.format).with_limit(options.limit);
    match render(&mut presenter, &users, options, err) {
        Ok(()) => EXIT_OK,
        Err(e) => {
            let _ = writeln!(err, "Error: failed to write output: {}", e);
            EXIT_FETCH_FAILED
        }
    }
}

fn render<W: Write, E: Write>(
    presenter: &mut Presenter<W>,
    users: &[UserRecord],
    options: &RunOptions,
    err: &mut E,
) -> io::Result<()> {
    presenter.banner(&format!(
        "USER DATA FETCHER v{}\nExecution Time: {}",
        env!("CARGO_PKG_VERSION"),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    ))?;

    // Search narrows the listings only; stats and save see every fetched user
    let searched;
    let shown = match &options.search {
        Some((query, field)) => {
            searched = search_users(users, query, *field);
            tracing::info!(
                query = %query,
                field = %field,
                found = searched.len(),
                "Searched users"
            );
            if searched.is_empty() {
                writeln!(err, "No users found matching '{}' in {}", query, field)?;
                return Ok(());
            }
            &searched[..]
        }
        None => users,
    };

    let stats = options
        .stats
        .then(|| Statistics::collect(users, &options.prefix));

    if !options.format.is_text() {
        // Keep stdout a single document; notices go to stderr
        if shown.is_empty() {
            writeln!(err, "{}", NO_USERS)?;
        } else if filter_by_city_prefix(shown, &options.prefix).is_empty() {
            writeln!(err, "{}", NO_MATCHES)?;
        }
    }

    match options.format {
        OutputFormat::Csv => {
            presenter.display_report(shown, &options.prefix, None)?;
            if let Some(stats) = &stats {
                Presenter::new(&mut *err, OutputFormat::Minimal).display_statistics(stats)?;
            }
        }
        _ => presenter.display_report(shown, &options.prefix, stats.as_ref())?,
    }

    if let Some(path) = &options.save {
        match save_to_file(path, users) {
            Ok(()) => writeln!(err, "Data saved to {}", path.display())?,
            Err(e) => writeln!(err, "Error saving file: {}", e)?,
        }
    }

    presenter.banner("Completed successfully")
}
