//! HTTP fetcher for listing pages
//!
//! One GET per page, body returned as text. Deliberately bare: no retries,
//! no status-code checking, and no timeouts, so a network failure aborts the
//! whole run and a hung connection blocks it.

use reqwest::Client;

/// Builds the HTTP client used for the whole run
///
/// The client carries no custom headers and no timeout configuration.
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder().gzip(true).brotli(true).build()
}

/// Fetches a page and returns its body as text
///
/// The response status is not inspected: a 404 page's body is returned just
/// like a 200's, matching the fatal-on-network-failure-only contract.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The page URL
///
/// # Returns
///
/// * `Ok(String)` - The response body
/// * `Err(reqwest::Error)` - Connection-level failure
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, reqwest::Error> {
    let response = client.get(url).send().await?;
    response.text().await
}
