//! Crawl progress bookkeeping
//!
//! Two pieces of process-external state survive a run: an append-only log of
//! every page URL visited (a manual-resumption aid, never read back by the
//! scraper) and a running counter of all records collected so far. Both live
//! behind the [`ProgressTracker`] trait so the driver loop can be exercised
//! against an in-memory double.

mod file_progress;

pub use file_progress::FileProgress;

use thiserror::Error;

/// Errors that can occur while recording progress
#[derive(Debug, Error)]
pub enum ProgressError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Counter file '{path}' does not contain a non-negative integer: '{content}'")]
    InvalidCounter { path: String, content: String },
}

/// Result type for progress operations
pub type ProgressResult<T> = Result<T, ProgressError>;

/// Trait for crawl progress trackers
///
/// The visited-page log is write-only; the counter follows a
/// read-modify-write cycle on every page.
pub trait ProgressTracker {
    /// Appends a page URL to the visited log, one URL per line
    fn record_visited_page(&mut self, url: &str) -> ProgressResult<()>;

    /// Adds `count` to the running total and returns the new total
    fn add_to_total(&mut self, count: u64) -> ProgressResult<u64>;

    /// Returns the current running total
    fn current_total(&self) -> ProgressResult<u64>;
}

/// In-memory progress tracker for tests
#[derive(Debug, Default)]
pub struct MemoryProgress {
    pub visited: Vec<String>,
    pub total: u64,
}

impl MemoryProgress {
    /// Creates a tracker with the given starting total
    pub fn with_total(total: u64) -> Self {
        Self {
            visited: Vec::new(),
            total,
        }
    }
}

impl ProgressTracker for MemoryProgress {
    fn record_visited_page(&mut self, url: &str) -> ProgressResult<()> {
        self.visited.push(url.to_string());
        Ok(())
    }

    fn add_to_total(&mut self, count: u64) -> ProgressResult<u64> {
        self.total += count;
        Ok(self.total)
    }

    fn current_total(&self) -> ProgressResult<u64> {
        Ok(self.total)
    }
}
