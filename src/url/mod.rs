//! URL handling module for Sumi-Lens
//!
//! This module provides target validation, base normalization, href
//! resolution and internal/external link classification.

mod resolve;
mod validate;

// Re-export main functions
pub use resolve::{has_scheme, is_fragment, normalize_base, resolve_href};
pub use validate::validate_target;

/// Link classification types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// Link stays on the analysed site
    Internal,
    /// Link points somewhere else
    External,
}

impl LinkKind {
    /// Returns true for links rooted at the analysed site
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Classifies a raw href relative to the normalized base URL
///
/// An href without a scheme prefix is always internal. An href with a scheme
/// is internal only when it starts with the normalized base.
///
/// # Examples
///
/// ```
/// use sumi_lens::url::{classify_href, LinkKind};
///
/// assert_eq!(classify_href("http://abc.com", "/about"), LinkKind::Internal);
/// assert_eq!(classify_href("http://abc.com", "http://abc.com/team"), LinkKind::Internal);
/// assert_eq!(classify_href("http://abc.com", "https://example.com"), LinkKind::External);
/// ```
pub fn classify_href(normalized_base: &str, href: &str) -> LinkKind {
    if !has_scheme(href) || href.starts_with(normalized_base) {
        LinkKind::Internal
    } else {
        LinkKind::External
    }
}
