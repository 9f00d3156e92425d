//! FOI-Scraper main entry point
//!
//! Command-line interface for the request-disclosure scraper.

use clap::Parser;
use foi_scraper::config::load_config;
use foi_scraper::crawler::scrape;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// FOI-Scraper: a sequential request-disclosure scraper
///
/// Walks the paginated request listing of the configured site, appends one
/// CSV row per disclosure request, and records progress in two plain-text
/// files. The counter file must exist with a valid integer (e.g., `0`)
/// before the first run.
#[derive(Parser, Debug)]
#[command(name = "foi-scraper")]
#[command(version = "1.0.0")]
#[command(about = "A sequential request-disclosure scraper", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Resume from a specific page URL instead of the listing root
    ///
    /// The last line of the visited-pages log is the usual restart point.
    #[arg(long, value_name = "URL")]
    from: Option<String>,

    /// Validate config and show what would be scraped without fetching
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let config = match load_config(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.dry_run {
        handle_dry_run(&config, cli.from.as_deref());
        return Ok(());
    }

    // Run the scraper
    match scrape(config, cli.from).await {
        Ok(()) => {
            tracing::info!("Scrape completed successfully");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Scrape failed: {}", e);
            Err(e.into())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("foi_scraper=info,warn"),
            1 => EnvFilter::new("foi_scraper=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would be scraped
fn handle_dry_run(config: &foi_scraper::Config, from: Option<&str>) {
    println!("=== FOI-Scraper Dry Run ===\n");

    println!("Site:");
    println!("  Base URL: {}", config.site.base_url);
    println!("  Listing path: {}", config.site.listing_path);

    println!("\nOutput:");
    println!("  CSV store: {}", config.output.csv_path);
    println!("  Visited-pages log: {}", config.output.pages_log_path);
    println!("  Running counter: {}", config.output.counter_path);

    let start = match from {
        Some(url) => url.to_string(),
        None => format!("{}{}", config.site.base_url, config.site.listing_path),
    };

    println!("\n✓ Configuration is valid");
    println!("✓ Would start scraping at {}", start);
}
