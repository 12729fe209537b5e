/// Decides whether a scraped address should be accepted
///
/// Combines the structural validity check with the run's keyword filter.
#[derive(Debug, Clone, Default)]
pub struct EmailFilter {
    excluded_extensions: Vec<String>,
    keywords: Vec<String>,
}

impl EmailFilter {
    /// Creates a filter; keywords are matched case-insensitively
    pub fn new(excluded_extensions: Vec<String>, keywords: Vec<String>) -> Self {
        Self {
            excluded_extensions,
            keywords: keywords.into_iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// Returns true if the address is valid and passes the keyword filter
    pub fn accepts(&self, email: &str) -> bool {
        is_valid_email(email, &self.excluded_extensions) && matches_keywords(email, &self.keywords)
    }
}

/// Rejects tokens that look like filenames or numeric noise
///
/// An address is invalid when it ends with one of `excluded_extensions`
/// (compared ASCII case-insensitively) or when everything after the last
/// `@` is made of digits and dots only.
///
/// # Examples
///
/// ```
/// use email_harvester::email::is_valid_email;
///
/// let excluded = vec![".png".to_string()];
/// assert!(is_valid_email("a@b.com", &excluded));
/// assert!(!is_valid_email("icon@2x.png", &excluded));
/// assert!(!is_valid_email("x@123.45", &excluded));
/// ```
pub fn is_valid_email(email: &str, excluded_extensions: &[String]) -> bool {
    let lowered = email.to_ascii_lowercase();
    if excluded_extensions
        .iter()
        .any(|ext| lowered.ends_with(&ext.to_ascii_lowercase()))
    {
        return false;
    }

    let domain = email.rsplit('@').next().unwrap_or_default();
    let numeric_only = !domain.is_empty() && domain.chars().all(|c| c.is_ascii_digit() || c == '.');
    !numeric_only
}

/// Returns true if no keywords are configured or any keyword occurs in the address
///
/// Keywords are expected in lowercase; the address is lowercased before matching.
pub fn matches_keywords(email: &str, keywords: &[String]) -> bool {
    if keywords.is_empty() {
        return true;
    }
    let lowered = email.to_lowercase();
    keywords.iter().any(|k| lowered.contains(k.as_str()))
}
