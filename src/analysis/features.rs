//! Structural feature extractors
//!
//! Pure functions over a parsed [`Document`]: title, heading counts and
//! login-form detection.

use crate::analysis::document::{descendants, Document};
use std::collections::BTreeMap;

/// Heading levels counted by [`count_headings`]
pub const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

const LOGIN_INPUT_TYPES: [&str; 2] = ["password", "email"];
const LOGIN_INPUT_NAME: &str = "username";
const LOGIN_PHRASES: [&str; 2] = ["log in", "login"];

/// Returns the text of the first `<title>` element, or an empty string
pub fn extract_title(document: &Document) -> String {
    document.first_text("title").unwrap_or_default()
}

/// Counts `h1`..`h6` elements
///
/// The returned map always contains all six keys.
pub fn count_headings(document: &Document) -> BTreeMap<String, usize> {
    HEADING_TAGS
        .iter()
        .map(|tag| (tag.to_string(), document.count(tag)))
        .collect()
}

/// Returns true if any form in the document looks like a login form
///
/// A form qualifies when one of its inputs has `type` password/email or
/// `name` username (case-insensitive). Failing that, the form's text is
/// searched for "log in" / "login".
pub fn has_login_form(document: &Document) -> bool {
    document.elements("form").iter().any(|form| {
        let has_login_input = descendants(form, "input").iter().any(|input| {
            let element = input.value();
            let type_matches = element.attr("type").is_some_and(|kind| {
                LOGIN_INPUT_TYPES
                    .iter()
                    .any(|expected| kind.eq_ignore_ascii_case(expected))
            });
            let name_matches = element
                .attr("name")
                .is_some_and(|name| name.eq_ignore_ascii_case(LOGIN_INPUT_NAME));
            type_matches || name_matches
        });

        has_login_input || {
            let text = form.text().collect::<String>().to_lowercase();
            LOGIN_PHRASES.iter().any(|phrase| text.contains(phrase))
        }
    })
}
