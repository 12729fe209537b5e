//! HTML parser for extracting links
//!
//! Parsing is lenient: malformed markup never fails, it just yields
//! whatever anchors the parser could recover.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("anchor selector is valid"));

/// Extracts every anchor href from an HTML page as an absolute URL
///
/// # Link Resolution Rules
///
/// - Relative and protocol-relative hrefs are joined against `base_url`
/// - Fragment-only hrefs (`#section`) resolve to `base_url` itself
/// - Hrefs that cannot be resolved are skipped
/// - Non-HTTP schemes (`mailto:`, `javascript:`) are kept; the crawler
///   filters them
///
/// Results are deduplicated and returned in document order. If `base_url`
/// itself is not a valid URL, no links are returned.
///
/// # Example
///
/// ```
/// use email_harvester::crawler::extract_links;
///
/// let links = extract_links(r#"<a href="/about">x</a>"#, "https://ex.com/p");
/// assert_eq!(links, vec!["https://ex.com/about"]);
/// ```
pub fn extract_links(html: &str, base_url: &str) -> Vec<String> {
    let base = match Url::parse(base_url) {
        Ok(base) => base,
        Err(e) => {
            tracing::debug!("Cannot resolve links against {}: {}", base_url, e);
            return Vec::new();
        }
    };

    let document = Html::parse_document(html);
    let mut seen = HashSet::new();

    document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve_link(href, &base, base_url))
        .filter(|link| seen.insert(link.clone()))
        .collect()
}

fn resolve_link(href: &str, base: &Url, base_url: &str) -> Option<String> {
    if href.trim().starts_with('#') {
        return Some(base_url.to_string());
    }
    base.join(href).ok().map(String::from)
}
