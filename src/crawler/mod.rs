//! Scraper module for page fetching and record extraction
//!
//! This module contains the core scraping logic, including:
//! - HTTP fetching of listing pages
//! - Field extraction from parsed markup
//! - Next-page discovery
//! - Overall crawl coordination

mod coordinator;
mod extractor;
mod fetcher;
mod navigator;

pub use coordinator::Coordinator;
pub use extractor::{extract_requests, DisclosureRequest};
pub use fetcher::{build_http_client, fetch_page};
pub use navigator::{next_page, Navigation};

use crate::config::Config;
use crate::progress::FileProgress;
use crate::Result;
use std::path::Path;
use url::Url;

/// Runs a complete scrape of the configured site
///
/// This is the main entry point for starting a run. It will:
/// 1. Open the CSV sink, writing the header if the file is new
/// 2. Attach the file-backed progress tracker
/// 3. Walk the listing pages from `start_url` (or the configured listing
///    root) until no next-page control is found
///
/// # Arguments
///
/// * `config` - The scraper configuration
/// * `start_url` - Optional page to resume from instead of the listing root
///
/// # Returns
///
/// * `Ok(())` - Scrape ran to the end of the listing
/// * `Err(FoiError)` - Scrape aborted; progress up to the last fully
///   processed page is preserved on disk
pub async fn scrape(config: Config, start_url: Option<String>) -> Result<()> {
    let start = match start_url {
        Some(url) => Url::parse(&url)?,
        None => {
            let base = Url::parse(&config.site.base_url)?;
            base.join(&config.site.listing_path)?
        }
    };

    let sink = crate::output::CsvSink::new(Path::new(&config.output.csv_path))?;
    let progress = FileProgress::new(
        Path::new(&config.output.pages_log_path),
        Path::new(&config.output.counter_path),
    );

    let mut coordinator = Coordinator::new(config, sink, progress)?;
    coordinator.run(start).await
}
