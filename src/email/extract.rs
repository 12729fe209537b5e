use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._-]+@[a-zA-Z0-9._-]+\.[a-zA-Z0-9._-]+")
        .expect("email pattern is a valid regex")
});

/// Extracts every distinct email-shaped token from raw text
///
/// Matches are returned in order of first appearance. Case is preserved and
/// no validity filtering happens here; see [`super::EmailFilter`].
///
/// # Examples
///
/// ```
/// use email_harvester::email::extract_emails;
///
/// let found = extract_emails("contact a@b.com or visit pic.png");
/// assert_eq!(found, vec!["a@b.com"]);
/// ```
pub fn extract_emails(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    EMAIL_PATTERN
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|candidate| seen.insert(*candidate))
        .map(str::to_string)
        .collect()
}
