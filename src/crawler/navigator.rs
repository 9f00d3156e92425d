//! Next-page discovery
//!
//! The listing's pagination control is an anchor with an exact class
//! attribute. Traversal has two states: CONTINUE with the anchor's href, or
//! STOP. STOP is terminal and is reached when the control is absent or when
//! its target does not look like another listing page.

use crate::crawler::extractor::create_selector;
use crate::Result;
use scraper::Html;

/// Exact class attribute of the next-page anchor
const NEXT_PAGE_SELECTOR: &str = r#"a[class="btn -icon ion-search -block -blueberry"]"#;

/// Outcome of inspecting a page for a next-page control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Follow the contained link target, as found on the page
    Continue(String),
    /// End of traversal
    Stop,
}

/// Decides whether another listing page follows the current one
///
/// A present anchor whose href lacks `listing_path` is treated as the end of
/// the listing rather than followed: the control has pointed at an external
/// or malformed target, which is logged as a diagnostic.
///
/// # Arguments
///
/// * `document` - The parsed page
/// * `listing_path` - Fragment a next-page href must contain (e.g., "/requests")
///
/// # Returns
///
/// * `Ok(Navigation::Continue(href))` - The href, returned unchanged
/// * `Ok(Navigation::Stop)` - No next page
/// * `Err(FoiError)` - The selector failed to parse
pub fn next_page(document: &Html, listing_path: &str) -> Result<Navigation> {
    let anchor_sel = create_selector(NEXT_PAGE_SELECTOR)?;

    let href = document
        .select(&anchor_sel)
        .next()
        .and_then(|anchor| anchor.value().attr("href"));

    match href {
        None => Ok(Navigation::Stop),
        Some(target) if !target.contains(listing_path) => {
            tracing::warn!("unexpected next-page target: {}", target);
            Ok(Navigation::Stop)
        }
        Some(target) => Ok(Navigation::Continue(target.to_string())),
    }
}
