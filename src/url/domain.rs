use url::Url;

/// Extracts the network location of a URL for per-domain accounting
///
/// The key is the lowercase host, followed by `:port` when the URL carries a
/// non-default port, and preceded by any userinfo (`user@`). When the URL
/// cannot be parsed, the raw text between `://` and the first `/`, `?` or
/// `#` is used instead, lowercased. URLs with no authority at all share the
/// empty key.
///
/// # Examples
///
/// ```
/// use mailsweep::url::extract_domain;
///
/// assert_eq!(extract_domain("https://example.com/path"), "example.com");
/// assert_eq!(extract_domain("https://EXAMPLE.COM/path"), "example.com");
/// assert_eq!(extract_domain("http://example.com:8080/"), "example.com:8080");
/// assert_eq!(extract_domain("http://exa mple.com/"), "exa mple.com");
/// assert_eq!(extract_domain("not a url"), "");
/// ```
pub fn extract_domain(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return raw_authority(url);
    };

    let Some(host) = parsed.host_str() else {
        return raw_authority(url);
    };

    let mut domain = String::new();
    if !parsed.username().is_empty() {
        domain.push_str(parsed.username());
        if let Some(password) = parsed.password() {
            domain.push(':');
            domain.push_str(password);
        }
        domain.push('@');
    }

    domain.push_str(&host.to_lowercase());
    if let Some(port) = parsed.port() {
        domain.push(':');
        domain.push_str(&port.to_string());
    }

    domain
}

/// Authority text of a URL that did not parse, or empty without `://`
fn raw_authority(url: &str) -> String {
    let Some((_, rest)) = url.split_once("://") else {
        return String::new();
    };

    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    rest[..end].trim().to_lowercase()
}
