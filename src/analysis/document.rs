//! Parsed HTML document
//!
//! Wraps a scraper tree and exposes the handful of queries the extractors
//! need: elements by tag name, element text and attributes.

use crate::ParseError;
use scraper::{ElementRef, Html, Selector};

/// A parsed, read-only HTML document
#[derive(Debug)]
pub struct Document {
    html: Html,
}

impl Document {
    /// Decodes and parses a buffered response body
    ///
    /// # Arguments
    ///
    /// * `bytes` - The raw body bytes
    ///
    /// # Returns
    ///
    /// * `Ok(Document)` - Successfully parsed document
    /// * `Err(ParseError)` - The body is not UTF-8 text
    ///
    /// # Example
    ///
    /// ```
    /// use sumi_lens::analysis::Document;
    ///
    /// let document = Document::parse(b"<html><head><title>Test</title></head></html>").unwrap();
    /// assert_eq!(document.count("title"), 1);
    /// ```
    pub fn parse(bytes: &[u8]) -> Result<Self, ParseError> {
        decode(bytes).map(Self::from_html)
    }

    /// Parses already-decoded markup
    ///
    /// html5ever recovers from malformed markup the way browsers do, so this
    /// never fails. Recovered errors are only logged.
    pub fn from_html(text: &str) -> Self {
        let html = Html::parse_document(text);
        if !html.errors.is_empty() {
            tracing::debug!("Recovered from {} markup errors", html.errors.len());
        }
        Self { html }
    }

    /// Returns every element with the given tag name, in document order
    pub fn elements(&self, tag: &str) -> Vec<ElementRef<'_>> {
        match Selector::parse(tag) {
            Ok(selector) => self.html.select(&selector).collect(),
            Err(e) => {
                tracing::debug!("Invalid selector '{}': {:?}", tag, e);
                Vec::new()
            }
        }
    }

    /// Counts elements with the given tag name
    pub fn count(&self, tag: &str) -> usize {
        self.elements(tag).len()
    }

    /// Text content of the first element with the given tag name
    pub fn first_text(&self, tag: &str) -> Option<String> {
        self.elements(tag)
            .first()
            .map(|element| element.text().collect::<String>())
    }
}

/// Decodes a buffered body as UTF-8 without copying
pub fn decode(bytes: &[u8]) -> Result<&str, ParseError> {
    std::str::from_utf8(bytes).map_err(|e| ParseError::InvalidEncoding {
        offset: e.valid_up_to(),
    })
}

/// Returns descendant elements of `element` with the given tag name
pub fn descendants<'a>(element: &ElementRef<'a>, tag: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(tag) {
        Ok(selector) => element.select(&selector).collect(),
        Err(_) => Vec::new(),
    }
}
