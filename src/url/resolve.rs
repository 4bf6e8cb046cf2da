//! Base normalization and href resolution
//!
//! These rules are textual: a relative href is appended to the normalized
//! base, it is not joined through RFC 3986 resolution.

const SCHEME_PREFIX: &str = "http";

/// Strips a single trailing slash from the base URL
///
/// # Examples
///
/// ```
/// use sumi_lens::url::normalize_base;
///
/// assert_eq!(normalize_base("http://abc.com/"), "http://abc.com");
/// assert_eq!(normalize_base("http://abc.com//"), "http://abc.com/");
/// ```
pub fn normalize_base(base: &str) -> &str {
    base.strip_suffix('/').unwrap_or(base)
}

/// Returns true if the href already carries an `http`/`https` scheme prefix
pub fn has_scheme(href: &str) -> bool {
    href.starts_with(SCHEME_PREFIX)
}

/// Returns true for same-page anchors (`#section`)
pub fn is_fragment(href: &str) -> bool {
    href.starts_with('#')
}

/// Resolves an href against an already-normalized base
///
/// # Rules
///
/// | href | result |
/// |------|--------|
/// | `http…` | unchanged |
/// | `/path` | `base + href` |
/// | `path` | `base + "/" + href` |
///
/// # Examples
///
/// ```
/// use sumi_lens::url::resolve_href;
///
/// assert_eq!(resolve_href("http://abc.com", "/about"), "http://abc.com/about");
/// assert_eq!(resolve_href("http://abc.com", "privacy.html"), "http://abc.com/privacy.html");
/// assert_eq!(resolve_href("http://abc.com", "https://example.com"), "https://example.com");
/// ```
pub fn resolve_href(base: &str, href: &str) -> String {
    if has_scheme(href) {
        href.to_string()
    } else if href.starts_with('/') {
        format!("{}{}", base, href)
    } else {
        format!("{}/{}", base, href)
    }
}
