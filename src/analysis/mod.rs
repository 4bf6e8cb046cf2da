//! Page analysis
//!
//! This module contains the core analysis logic, including:
//! - Document parsing
//! - Feature extraction (markup version, title, headings, login forms)
//! - Link harvesting with a bounded pool of probe workers
//! - Orchestration of a full page analysis

mod analyser;
mod doctype;
mod document;
mod features;
mod harvest;

pub use analyser::Analyser;
pub use doctype::{classify_markup_version, MarkupVersion};
pub use document::{decode, Document};
pub use features::{count_headings, extract_title, has_login_form, HEADING_TAGS};
pub use harvest::{is_accessible_status, LinkHarvester, LinkSummary, ProbeOutcome};

use crate::LensError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A batch of target URLs, each analysed independently
///
/// The JSON form is `{"url": ["https://...", ...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    #[serde(rename = "url")]
    pub urls: Vec<String>,
}

/// Everything learned about one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Declared markup version
    pub html_version: MarkupVersion,

    /// Text of the first `<title>`, empty if there is none
    pub title: String,

    /// Element counts for `h1`..`h6`
    pub headings: BTreeMap<String, usize>,

    /// Link classification and reachability
    pub link: LinkSummary,

    /// Whether any form looks like a login form
    pub has_login_form: bool,
}

/// Outcome of analysing one page in a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PageOutcome {
    Analysed { result: AnalysisResult },
    Failed { error: String },
}

/// One entry of a batch report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageReport {
    /// The URL as it was requested
    pub url: String,

    #[serde(flatten)]
    pub outcome: PageOutcome,
}

impl PageReport {
    /// Wraps the result of [`Analyser::analyse`]
    pub fn new(url: String, outcome: Result<AnalysisResult, LensError>) -> Self {
        let outcome = match outcome {
            Ok(result) => PageOutcome::Analysed { result },
            Err(e) => PageOutcome::Failed {
                error: e.to_string(),
            },
        };
        Self { url, outcome }
    }

    /// Returns true if the page was analysed successfully
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, PageOutcome::Analysed { .. })
    }
}
