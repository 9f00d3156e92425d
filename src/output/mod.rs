//! Output module for durable record storage
//!
//! The only output format is a flat CSV file with a fixed header. Fields
//! containing the delimiter or quote are backslash-escaped rather than
//! quote-doubled, so downstream consumers must match that convention.

mod csv_sink;

pub use csv_sink::{CsvSink, CSV_HEADERS};

use thiserror::Error;

/// Errors that can occur while writing records
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for sink operations
pub type SinkResult<T> = Result<T, SinkError>;
