/// userfetch - fetch and display users from the JSONPlaceholder API
use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use userfetch::{
    app::{self, RunOptions, DEFAULT_LOG_FILTER, EXIT_CONFIG},
    cli::Cli,
    config::AppConfig,
};
use userfetch_client::UserFetcher;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Logs go to stderr so json/csv output on stdout stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let (fetcher, options) = match setup(&cli) {
        Ok(ready) => ready,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    let code = app::run(&fetcher, &options, io::stdout().lock(), &mut io::stderr()).await;
    ExitCode::from(code)
}

fn setup(cli: &Cli) -> anyhow::Result<(UserFetcher, RunOptions)> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.merge_cli(cli);
    config.validate()?;

    let fetcher = UserFetcher::new(config.fetcher_config())?;
    tracing::debug!(
        url = %fetcher.url(),
        timeout = ?fetcher.timeout(),
        "Configuration loaded"
    );

    let options = RunOptions::new(&config, cli)?;
    Ok((fetcher, options))
}
