//! File-backed progress tracker
//!
//! Matches the on-disk layout the rest of the tooling expects: `pages.txt`
//! grows by one URL per page, `total_requests.txt` holds a single integer
//! that is overwritten on every page.

use crate::progress::{ProgressError, ProgressResult, ProgressTracker};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Progress tracker persisting to two plain-text files
#[derive(Debug)]
pub struct FileProgress {
    pages_log_path: PathBuf,
    counter_path: PathBuf,
}

impl FileProgress {
    /// Creates a tracker over the given log and counter paths
    ///
    /// The counter file is not created here: it must already exist with a
    /// valid non-negative integer (e.g., `0`) before the first run, and the
    /// first `add_to_total` call fails otherwise.
    pub fn new(pages_log_path: &Path, counter_path: &Path) -> Self {
        Self {
            pages_log_path: pages_log_path.to_path_buf(),
            counter_path: counter_path.to_path_buf(),
        }
    }

    /// Reads and parses the counter file
    fn read_counter(&self) -> ProgressResult<u64> {
        let raw = fs::read_to_string(&self.counter_path)?;
        raw.trim()
            .parse::<u64>()
            .map_err(|_| ProgressError::InvalidCounter {
                path: self.counter_path.display().to_string(),
                content: raw.trim().to_string(),
            })
    }
}

impl ProgressTracker for FileProgress {
    fn record_visited_page(&mut self, url: &str) -> ProgressResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.pages_log_path)?;
        writeln!(file, "{}", url)?;
        Ok(())
    }

    fn add_to_total(&mut self, count: u64) -> ProgressResult<u64> {
        let total = self.read_counter()? + count;
        // Overwrite, not append
        fs::write(&self.counter_path, total.to_string())?;
        Ok(total)
    }

    fn current_total(&self) -> ProgressResult<u64> {
        self.read_counter()
    }
}
