//! Hub Fetcher CLI application
//!
//! Command-line interface for downloading Hugging Face Hub repositories.
//! Downloads one repository per invocation, sequentially, with aggregate
//! byte progress.

use std::process;

use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use hub_fetcher::cli::{handle_fetch, Cli};
use hub_fetcher::errors::Result;

#[tokio::main]
async fn main() {
    let result = run().await;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Main application logic
async fn run() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenv::dotenv().ok(); // Ignore errors if file doesn't exist

    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize logging based on verbosity
    init_logging(&cli);

    info!("Hub Fetcher v{} starting", env!("CARGO_PKG_VERSION"));

    handle_fetch(cli.fetch).await
}

/// Initialize logging based on CLI verbosity settings
fn init_logging(cli: &Cli) {
    let log_level = cli.log_level();

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("hub_fetcher={}", log_level).parse().unwrap());

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(cli.global.very_verbose)
        .with_writer(std::io::stderr)
        .init();

    if cli.global.very_verbose {
        info!("Very verbose logging enabled");
    } else if cli.global.verbose {
        info!("Verbose logging enabled");
    }
}
