//! Markup version classification from the raw doctype declaration

use serde::{Deserialize, Serialize};
use std::fmt;

/// Markup version declared by a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkupVersion {
    #[serde(rename = "HTML5")]
    Html5,
    #[serde(rename = "HTML 4.01")]
    Html401,
    #[serde(rename = "XHTML 1.0")]
    Xhtml10,
    #[serde(rename = "HTML 3.2")]
    Html32,
    #[serde(rename = "Unknown or missing doctype")]
    Unknown,
}

impl MarkupVersion {
    /// Human-readable label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Html5 => "HTML5",
            Self::Html401 => "HTML 4.01",
            Self::Xhtml10 => "XHTML 1.0",
            Self::Html32 => "HTML 3.2",
            Self::Unknown => "Unknown or missing doctype",
        }
    }
}

impl fmt::Display for MarkupVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical declarations, lowercase, checked in order
const DOCTYPES: &[(&str, MarkupVersion)] = &[
    ("<!doctype html>", MarkupVersion::Html5),
    (
        r#"<!doctype html public "-//w3c//dtd html 4.01""#,
        MarkupVersion::Html401,
    ),
    (
        r#"<!doctype html public "-//w3c//dtd xhtml 1.0""#,
        MarkupVersion::Xhtml10,
    ),
    (
        r#"<!doctype html public "-//w3c//dtd html 3.2""#,
        MarkupVersion::Html32,
    ),
];

/// Classifies the markup version from the raw document text
///
/// Matching is a case-insensitive substring search; the first declaration
/// found wins.
///
/// # Examples
///
/// ```
/// use sumi_lens::analysis::{classify_markup_version, MarkupVersion};
///
/// assert_eq!(classify_markup_version("<!DOCTYPE html><html></html>"), MarkupVersion::Html5);
/// assert_eq!(classify_markup_version("<html></html>"), MarkupVersion::Unknown);
/// ```
pub fn classify_markup_version(raw: &str) -> MarkupVersion {
    let lowered = raw.to_lowercase();

    DOCTYPES
        .iter()
        .find(|(declaration, _)| lowered.contains(declaration))
        .map(|(_, version)| *version)
        .unwrap_or(MarkupVersion::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html5() {
        let html = "\n<!DOCTYPE html>\n<html><head><title>Link Test Page</title></head></html>";
        assert_eq!(classify_markup_version(html), MarkupVersion::Html5);
    }

    #[test]
    fn test_html5_any_case() {
        assert_eq!(classify_markup_version("<!doctype HTML>"), MarkupVersion::Html5);
        assert_eq!(classify_markup_version("<!DocType Html>"), MarkupVersion::Html5);
    }

    #[test]
    fn test_html401() {
        let html = r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01//EN" "http://www.w3.org/TR/html4/strict.dtd">"#;
        assert_eq!(classify_markup_version(html), MarkupVersion::Html401);
    }

    #[test]
    fn test_xhtml10() {
        let html = r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Strict//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd">"#;
        assert_eq!(classify_markup_version(html), MarkupVersion::Xhtml10);
    }

    #[test]
    fn test_html32() {
        let html = r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 3.2 Final//EN">"#;
        assert_eq!(classify_markup_version(html), MarkupVersion::Html32);
    }

    #[test]
    fn test_missing_doctype() {
        assert_eq!(
            classify_markup_version("<html><body></body></html>"),
            MarkupVersion::Unknown
        );
        assert_eq!(classify_markup_version(""), MarkupVersion::Unknown);
    }

    #[test]
    fn test_labels() {
        assert_eq!(MarkupVersion::Html5.to_string(), "HTML5");
        assert_eq!(
            MarkupVersion::Unknown.to_string(),
            "Unknown or missing doctype"
        );
        assert_eq!(
            serde_json::to_string(&MarkupVersion::Html401).unwrap(),
            r#""HTML 4.01""#
        );
    }
}
