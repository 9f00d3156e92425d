//! CSV sink for extracted records

use crate::output::SinkResult;
use crate::crawler::DisclosureRequest;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// Fixed CSV header, in the exact order the extractor emits fields
pub const CSV_HEADERS: [&str; 8] = [
    "title",
    "agency",
    "requester name",
    "request date",
    "purpose",
    "status",
    "coverage",
    "tracking number",
];

/// Append-only CSV store for disclosure requests
///
/// The header row is written exactly once, when the file does not exist yet.
/// Re-running against an existing file leaves the header alone but appends
/// data rows without any deduplication.
#[derive(Debug)]
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    /// Opens the sink, creating the file with its header row if absent
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the CSV file
    ///
    /// # Returns
    ///
    /// * `Ok(CsvSink)` - Sink ready for appends
    /// * `Err(SinkError)` - Failed to create or write the header
    pub fn new(path: &Path) -> SinkResult<Self> {
        let sink = Self {
            path: path.to_path_buf(),
        };

        if !sink.path.exists() {
            let file = OpenOptions::new()
                .create(true)
                .write(true)
                .open(&sink.path)?;
            let mut writer = Self::builder().from_writer(file);
            writer.write_record(CSV_HEADERS)?;
            writer.flush()?;
        }

        Ok(sink)
    }

    /// Appends one row per extracted record
    ///
    /// Records missing a request date produce a 7-field row, so the writer
    /// runs in flexible mode instead of enforcing the header width.
    pub fn append(&self, requests: &[DisclosureRequest]) -> SinkResult<usize> {
        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = Self::builder().from_writer(file);

        for request in requests {
            writer.write_record(request.fields())?;
        }
        writer.flush()?;

        Ok(requests.len())
    }

    /// Writer configured for backslash escaping instead of quote doubling
    fn builder() -> csv::WriterBuilder {
        let mut builder = csv::WriterBuilder::new();
        builder
            .has_headers(false)
            .flexible(true)
            .double_quote(false)
            .escape(b'\\');
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn request(title: &str) -> DisclosureRequest {
        DisclosureRequest {
            title: title.to_string(),
            agency: "DOH".to_string(),
            requester: "Juan dela Cruz".to_string(),
            request_date: Some("January 5, 2021".to_string()),
            purpose: "Research".to_string(),
            status: "SUCCESSFUL".to_string(),
            coverage: "2020".to_string(),
            tracking_number: "#DOH-123".to_string(),
        }
    }

    #[test]
    fn test_new_file_gets_header_row() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        CsvSink::new(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content.lines().next().unwrap(),
            "title,agency,requester name,request date,purpose,status,coverage,tracking number"
        );
    }

    #[test]
    fn test_reinit_does_not_duplicate_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let sink = CsvSink::new(&path).unwrap();
        sink.append(&[request("First")]).unwrap();
        drop(sink);

        // Simulates a program restart against the same file
        CsvSink::new(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let headers: Vec<_> = content.lines().filter(|l| l.starts_with("title,")).collect();
        assert_eq!(headers.len(), 1);
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_append_writes_fields_in_header_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let sink = CsvSink::new(&path).unwrap();
        sink.append(&[request("Budget records")]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let row = content.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "Budget records,DOH,Juan dela Cruz,\"January 5, 2021\",Research,SUCCESSFUL,2020,#DOH-123"
        );
    }

    #[test]
    fn test_missing_date_produces_seven_field_row() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let mut undated = request("Undated");
        undated.request_date = None;

        let sink = CsvSink::new(&path).unwrap();
        sink.append(&[undated]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let row = content.lines().nth(1).unwrap();
        assert_eq!(row.split(',').count(), 7);
    }

    #[test]
    fn test_embedded_quote_is_backslash_escaped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let mut quoted = request("Quoted");
        quoted.purpose = r#"the "official" figures"#.to_string();

        let sink = CsvSink::new(&path).unwrap();
        sink.append(&[quoted]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains(r#"\""#));
        assert!(!content.contains(r#""""#));
    }

    #[test]
    fn test_appends_accumulate_across_sink_instances() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        CsvSink::new(&path).unwrap().append(&[request("One")]).unwrap();
        CsvSink::new(&path)
            .unwrap()
            .append(&[request("Two"), request("Three")])
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        // Header plus three data rows
        assert_eq!(content.lines().count(), 4);
    }
}
