//! Scrape coordinator - the sequential driver loop
//!
//! One page at a time: record the URL, fetch, parse, extract, persist, then
//! ask the navigator whether to continue. A page is fully persisted before
//! the next one is requested, so an aborted run keeps everything up to the
//! last completed page. There is no iteration cap and no cycle detection;
//! the site's own next-page chain bounds the run.

use crate::config::Config;
use crate::output::CsvSink;
use crate::progress::ProgressTracker;
use crate::crawler::extractor::extract_requests;
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::navigator::{next_page, Navigation};
use crate::Result;
use reqwest::Client;
use scraper::Html;
use url::Url;

/// Drives a scrape from a start page to the end of the listing
pub struct Coordinator<P: ProgressTracker> {
    config: Config,
    client: Client,
    sink: CsvSink,
    progress: P,
}

impl<P: ProgressTracker> Coordinator<P> {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `config` - The scraper configuration
    /// * `sink` - The CSV sink records are appended to
    /// * `progress` - The progress tracker recording pages and totals
    pub fn new(config: Config, sink: CsvSink, progress: P) -> Result<Self> {
        let client = build_http_client()?;
        Ok(Self {
            config,
            client,
            sink,
            progress,
        })
    }

    /// Walks listing pages from `start` until the navigator signals STOP
    ///
    /// Per iteration: log the URL to the visited file, fetch and parse the
    /// page, extract its records, append them to the CSV sink, bump the
    /// running counter, then follow the next-page link if one exists. Any
    /// error aborts the run; output files keep the state of the last fully
    /// processed page.
    pub async fn run(&mut self, start: Url) -> Result<()> {
        let base = Url::parse(&self.config.site.base_url)?;
        let mut page_url = start;

        loop {
            self.progress.record_visited_page(page_url.as_str())?;
            tracing::info!("scraping: {}", page_url);

            let body = fetch_page(&self.client, page_url.as_str()).await?;

            // The parsed page must not outlive this iteration.
            let (requests, navigation) = {
                let document = Html::parse_document(&body);
                (
                    extract_requests(&document)?,
                    next_page(&document, &self.config.site.listing_path)?,
                )
            };

            let count = self.sink.append(&requests)?;
            let total = self.progress.add_to_total(count as u64)?;
            tracing::info!("requests collected: {} / total: {}", count, total);

            match navigation {
                Navigation::Stop => break,
                Navigation::Continue(href) => page_url = base.join(&href)?,
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OutputConfig, SiteConfig};
    use crate::progress::MemoryProgress;
    use tempfile::tempdir;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: &str, csv_path: &str) -> Config {
        Config {
            site: SiteConfig {
                base_url: base_url.to_string(),
                listing_path: "/requests".to_string(),
            },
            output: OutputConfig {
                csv_path: csv_path.to_string(),
                pages_log_path: "unused".to_string(),
                counter_path: "unused".to_string(),
            },
        }
    }

    fn listing(title: &str, tracking: &str) -> String {
        format!(
            r#"<div class="result">
                <h4 class="title">{title}</h4>
                <label class="component-status">SUCCESSFUL</label>
                <p class="description">
                    <span>DOH</span> <span>Juan dela Cruz</span> requested on January 5, 2021
                    <span>Research</span> <span>2020</span> <span>{tracking}</span>
                </p>
            </div>"#
        )
    }

    #[tokio::test]
    async fn test_run_follows_next_page_chain_and_halts() {
        let server = MockServer::start().await;

        let page_one = format!(
            r#"<html><body>{}{}<a class="btn -icon ion-search -block -blueberry"
                href="/requests?page=2">Next</a></body></html>"#,
            listing("First", "#1"),
            listing("Second", "#2"),
        );
        let page_two = format!("<html><body>{}</body></html>", listing("Third", "#3"));

        Mock::given(method("GET"))
            .and(path("/requests"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_string(page_two))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/requests"))
            .respond_with(ResponseTemplate::new(200).set_body_string(page_one))
            .mount(&server)
            .await;

        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("out.csv");
        let sink = CsvSink::new(&csv_path).unwrap();
        let config = test_config(&server.uri(), csv_path.to_str().unwrap());
        let start = Url::parse(&format!("{}/requests", server.uri())).unwrap();

        let mut coordinator =
            Coordinator::new(config, sink, MemoryProgress::with_total(10)).unwrap();
        coordinator.run(start).await.unwrap();

        assert_eq!(coordinator.progress.visited.len(), 2);
        assert_eq!(coordinator.progress.total, 13);

        let content = std::fs::read_to_string(&csv_path).unwrap();
        // Header plus three data rows across both pages
        assert_eq!(content.lines().count(), 4);
    }

    #[tokio::test]
    async fn test_run_aborts_on_network_failure() {
        let dir = tempdir().unwrap();
        let csv_path = dir.path().join("out.csv");
        let sink = CsvSink::new(&csv_path).unwrap();
        let config = test_config("http://127.0.0.1:1", csv_path.to_str().unwrap());
        let start = Url::parse("http://127.0.0.1:1/requests").unwrap();

        let mut coordinator =
            Coordinator::new(config, sink, MemoryProgress::default()).unwrap();
        let result = coordinator.run(start).await;

        assert!(result.is_err());
        // The URL was logged before the fetch was attempted.
        assert_eq!(coordinator.progress.visited.len(), 1);
    }
}
