//! Main entry point for Bible CLI

#![forbid(unsafe_code)]

use bible_cli::cli::commands::{dispatch, Args};
use bible_cli::BibleClient;
use clap::Parser;
use dotenvy::dotenv;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Failures are reported on stdout and the process still exits 0.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}={}", env!("CARGO_CRATE_NAME"), log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!("{} {}", bible_cli::NAME, bible_cli::VERSION);

    let config = match args.api_config() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            println!("Configuration error: {}", e);
            return Ok(());
        }
    };

    let client = match BibleClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create HTTP client: {}", e);
            println!("{}", e);
            return Ok(());
        }
    };

    let mut stdout = std::io::stdout();
    if let Err(e) = dispatch(&args, &client, &mut stdout).await {
        error!("Failed to write output: {}", e);
    }

    Ok(())
}
