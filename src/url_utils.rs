//! URL utility functions.
//!
//! Resolution of `href` and `src` attributes against a configured base URL.
//! Resolution is strictly best-effort: anything that cannot be resolved is
//! passed through verbatim.

use url::Url;

/// Parse a string as an absolute http(s) URL.
///
/// Returns `None` for relative references, other schemes, and anything
/// without a host.
#[must_use]
pub fn parse_absolute_url(s: &str) -> Option<Url> {
    let s = s.trim();

    if s.is_empty() {
        return None;
    }

    // Must start with http:// or https://
    if !s.starts_with("http://") && !s.starts_with("https://") {
        return None;
    }

    match Url::parse(s) {
        Ok(url) if url.host().is_some() => Some(url),
        _ => None,
    }
}

/// Convert a relative or absolute URL to absolute form.
///
/// Already-absolute URLs and special schemes come back unchanged, as does
/// anything the base cannot resolve.
///
/// # Examples
/// ```
/// use htmlstr::url_utils::create_absolute_url;
/// use url::Url;
///
/// let base = Url::parse("https://example.com/articles/").unwrap();
/// assert_eq!(
///     create_absolute_url("page.html", &base),
///     "https://example.com/articles/page.html"
/// );
/// assert_eq!(
///     create_absolute_url("mailto:test@example.com", &base),
///     "mailto:test@example.com"
/// );
/// ```
#[must_use]
pub fn create_absolute_url(url_str: &str, base: &Url) -> String {
    let url_str = url_str.trim();

    if url_str.is_empty() {
        return String::new();
    }

    // Preserve special URLs unchanged
    if url_str.starts_with("data:")
        || url_str.starts_with("javascript:")
        || url_str.starts_with("mailto:")
        || url_str.starts_with("tel:")
    {
        return url_str.to_string();
    }

    // If already absolute, return as-is
    if parse_absolute_url(url_str).is_some() {
        return url_str.to_string();
    }

    // Resolve relative URL against base
    match base.join(url_str) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => url_str.to_string(),
    }
}
