//! HTTP fetch collaborator for the CLI binary. Not used by the library
//! pipeline itself — [`crate::find_date`] only ever consumes HTML a caller
//! already has in hand.

use anyhow::{Context, Result};

/// Fetches `url` with a blocking GET and returns the response body as text.
/// Errors (network failure, non-UTF-8 body, non-success status) are
/// reported to the caller rather than collapsed to `None` — fetching is an
/// ambient concern the pipeline itself never performs.
pub fn fetch_url(url: &str) -> Result<String> {
    let response = reqwest::blocking::get(url).with_context(|| format!("fetching {url}"))?;
    let response = response
        .error_for_status()
        .with_context(|| format!("non-success response from {url}"))?;
    response.text().context("reading response body as text")
}
