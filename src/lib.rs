//! FOI-Scraper: a sequential request-disclosure scraper
//!
//! This crate walks the paginated request listing of a government
//! request-disclosure website, extracts one record per listing, appends the
//! records to a CSV file, and keeps two plain-text progress files so an
//! interrupted run can be resumed by hand.

pub mod config;
pub mod crawler;
pub mod output;
pub mod progress;

use thiserror::Error;

/// Main error type for FOI-Scraper operations
#[derive(Debug, Error)]
pub enum FoiError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid selector: {0}")]
    Selector(String),

    #[error("Progress error: {0}")]
    Progress(#[from] progress::ProgressError),

    #[error("CSV sink error: {0}")]
    Sink(#[from] output::SinkError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for FOI-Scraper operations
pub type Result<T> = std::result::Result<T, FoiError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{DisclosureRequest, Navigation};
pub use output::{CsvSink, CSV_HEADERS};
pub use progress::{FileProgress, ProgressTracker};
