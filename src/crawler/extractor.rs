//! Field extraction from a parsed listing page
//!
//! A listing page shows a batch of disclosure requests. Three selector
//! queries run independently over the tree and are zipped positionally: the
//! Nth description block, status label, and title heading are assumed to
//! belong to the same request. The zip implicitly truncates to the shortest
//! of the three lists on a malformed page.

use crate::{FoiError, Result};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::OnceLock;

/// Selector for a listing's description block
const DESCRIPTION_SELECTOR: &str = "p.description";
/// Selector for a listing's status label
const STATUS_SELECTOR: &str = "label.component-status";
/// Selector for a listing's title heading
const TITLE_SELECTOR: &str = "h4.title";
/// Selector for the positional sub-fields inside a description block
const SPAN_SELECTOR: &str = "span";

/// Matches a "Month D, YYYY" date anywhere in a description block's text
fn month_day_year() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?:January|February|March|April|May|June|July|August|September|October|November|December) \d{1,2}, \d{4}",
        )
        .unwrap()
    })
}

/// One disclosure request extracted from a listing
///
/// Field order mirrors the CSV header. `request_date` is the only field the
/// site does not carry in a dedicated element; when the date pattern does
/// not match, the record is serialized without a date cell (a 7-field row),
/// matching the store's historical format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisclosureRequest {
    pub title: String,
    pub agency: String,
    pub requester: String,
    pub request_date: Option<String>,
    pub purpose: String,
    pub status: String,
    pub coverage: String,
    pub tracking_number: String,
}

impl DisclosureRequest {
    /// Returns the CSV cells in header order, omitting an absent date
    pub fn fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.agency.as_str(), self.requester.as_str()];
        if let Some(date) = &self.request_date {
            fields.push(date.as_str());
        }
        fields.extend([
            self.purpose.as_str(),
            self.status.as_str(),
            self.coverage.as_str(),
            self.tracking_number.as_str(),
        ]);
        fields
    }
}

/// Extracts every disclosure request found on a parsed listing page
///
/// # Arguments
///
/// * `document` - The parsed page
///
/// # Returns
///
/// * `Ok(Vec<DisclosureRequest>)` - One record per aligned listing, in page
///   order; empty when the page carries no listings
/// * `Err(FoiError)` - A selector failed to parse
pub fn extract_requests(document: &Html) -> Result<Vec<DisclosureRequest>> {
    let description_sel = create_selector(DESCRIPTION_SELECTOR)?;
    let status_sel = create_selector(STATUS_SELECTOR)?;
    let title_sel = create_selector(TITLE_SELECTOR)?;
    let span_sel = create_selector(SPAN_SELECTOR)?;

    let mut requests = Vec::new();

    let descriptions = document.select(&description_sel);
    let statuses = document.select(&status_sel);
    let titles = document.select(&title_sel);

    for ((description, status), title) in descriptions.zip(statuses).zip(titles) {
        let spans: Vec<ElementRef> = description.select(&span_sel).collect();

        // Sub-fields sit at fixed span positions; a missing span yields an
        // empty field rather than a failure.
        let span_text = |index: usize| {
            spans
                .get(index)
                .map(|span| trimmed_text(*span))
                .unwrap_or_default()
        };

        let description_text = trimmed_text(description);
        let request_date = month_day_year()
            .find(&description_text)
            .map(|m| m.as_str().to_string());

        requests.push(DisclosureRequest {
            title: trimmed_text(title),
            agency: span_text(0),
            requester: span_text(1),
            request_date,
            purpose: span_text(2),
            status: trimmed_text(status),
            coverage: span_text(3),
            tracking_number: span_text(4),
        });
    }

    Ok(requests)
}

/// Collects an element's text content with surrounding whitespace trimmed
fn trimmed_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

pub(crate) fn create_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|_| FoiError::Selector(selector.to_string()))
}
