//! URL handling module for Email Harvester
//!
//! This module provides the scheme and domain-suffix checks the crawler
//! applies before fetching a page.

mod domain;

pub use domain::{matches_target_suffix, network_location};

/// Returns true if the URL string starts with an HTTP or HTTPS scheme
///
/// The check is a plain prefix test on the raw string; anything else
/// (`mailto:`, `javascript:`, `ftp://`, relative paths) is not fetchable.
///
/// # Examples
///
/// ```
/// use email_harvester::url::is_fetchable_scheme;
///
/// assert!(is_fetchable_scheme("https://example.org/"));
/// assert!(!is_fetchable_scheme("mailto:someone@example.org"));
/// ```
pub fn is_fetchable_scheme(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
