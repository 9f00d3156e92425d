use serde::Deserialize;

/// Main configuration structure for FOI-Scraper
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub site: SiteConfig,
    pub output: OutputConfig,
}

/// Target site configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Base URL of the disclosure site (e.g., "https://www.foi.gov.ph")
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Path of the paginated request listing (e.g., "/requests").
    ///
    /// Doubles as the fragment the pagination navigator requires in a
    /// next-page link before following it.
    #[serde(rename = "listing-path")]
    pub listing_path: String,
}

/// Output file configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the CSV file collecting extracted records
    #[serde(rename = "csv-path", default = "default_csv_path")]
    pub csv_path: String,

    /// Path to the append-only log of visited page URLs
    #[serde(rename = "pages-log-path", default = "default_pages_log_path")]
    pub pages_log_path: String,

    /// Path to the running-total counter file.
    ///
    /// Must exist and contain a non-negative integer before the first run;
    /// the scraper never initializes it.
    #[serde(rename = "counter-path", default = "default_counter_path")]
    pub counter_path: String,
}

fn default_csv_path() -> String {
    "foi_requests.csv".to_string()
}

fn default_pages_log_path() -> String {
    "pages.txt".to_string()
}

fn default_counter_path() -> String {
    "total_requests.txt".to_string()
}
