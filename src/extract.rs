use scraper::{Html, Selector};

use crate::error::LinkError;

/// Fallback charset used to decode fetched HTML when the response headers do
/// not name one. Use e.g. "gbk" for many Chinese websites.
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Fetch the page at `url` and return the raw `href` value of every anchor
/// element that has one, in document order.
///
/// Anchors without an `href` attribute are skipped. The returned links may be
/// relative or absolute; no resolution and no deduplication happens here.
/// The GET blocks the calling thread until the response completes; an HTTP
/// error status counts as a failed fetch.
pub fn get_all_hrefs(url: &str, encoding: &str) -> Result<Vec<String>, LinkError> {
    log::debug!("Fetching: {}", url);
    let response = reqwest::blocking::get(url)?.error_for_status()?;
    let html = response.text_with_charset(encoding)?;

    let document = Html::parse_document(&html);
    let a_selector =
        Selector::parse("a").map_err(|e| LinkError::InvalidSelector(format!("a: {}", e)))?;

    let links: Vec<String> = document
        .select(&a_selector)
        .filter_map(|el| el.value().attr("href"))
        .map(str::to_string)
        .collect();

    log::debug!("Found {} href(s) on {}", links.len(), url);
    Ok(links)
}
