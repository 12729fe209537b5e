/// Returns the network location of a URL string, exactly as written
///
/// This is the text after `://` up to the first `/`, `?` or `#`: optional
/// credentials, the host, and any port the URL spells out. Nothing is
/// normalized, so case, Unicode hosts and default ports are kept.
/// Returns `None` when the string has no `://`.
///
/// # Examples
///
/// ```
/// use email_harvester::url::network_location;
///
/// assert_eq!(network_location("https://example.com/path"), Some("example.com"));
/// assert_eq!(network_location("http://127.0.0.1:8080/"), Some("127.0.0.1:8080"));
/// assert_eq!(network_location("mailto:a@b.org"), None);
/// ```
pub fn network_location(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once("://")?;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Checks whether a URL's network location ends with the target suffix
///
/// This is a plain string suffix test, not a match on domain labels:
/// `.org` accepts `example.org` and `ebay.org`, and `ample.org` also
/// accepts `example.org`. Strings without a network location never match.
pub fn matches_target_suffix(url: &str, suffix: &str) -> bool {
    network_location(url).is_some_and(|netloc| netloc.ends_with(suffix))
}
