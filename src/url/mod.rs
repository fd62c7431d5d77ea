//! URL helpers for mailsweep
//!
//! Domain extraction used as the key for per-domain visit limiting, and the
//! scheme filter applied to search result links.

mod domain;

pub use domain::extract_domain;

/// Returns true if the link starts with an HTTP(S) scheme
///
/// # Examples
///
/// ```
/// use mailsweep::url::is_http_link;
///
/// assert!(is_http_link("https://example.com/"));
/// assert!(!is_http_link("//duckduckgo.com/l/?uddg=x"));
/// ```
pub fn is_http_link(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}
