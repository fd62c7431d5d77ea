//! Email address extraction from page text

use crate::state::EmailSet;
use regex::Regex;
use std::sync::LazyLock;

/// Syntactic shape of an email address: local part, `@`, domain, and a
/// final label of two or more letters.
pub const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Extracts the distinct email addresses contained in `text`
///
/// Matches are case-sensitive and kept exactly as they appear. No
/// deliverability or DNS checking is done.
///
/// # Examples
///
/// ```
/// use mailsweep::crawler::extract_emails;
///
/// let emails = extract_emails("contact: a@b.com, a@b.com, bad@x");
/// assert_eq!(emails.len(), 1);
/// assert!(emails.contains("a@b.com"));
/// ```
pub fn extract_emails(text: &str) -> EmailSet {
    EMAIL_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
