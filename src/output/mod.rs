//! Output module for analysis reports
//!
//! This module handles:
//! - Collecting per-page results into a timestamped report
//! - Rendering reports as JSON or Markdown
//! - Writing reports to a file or stdout

mod json;
mod markdown;

pub use json::format_json;
pub use markdown::format_markdown;

use crate::analysis::PageReport;
use crate::OutputError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Markdown,
}

/// Report for one batch of analysed pages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// When the report was assembled
    pub generated_at: DateTime<Utc>,

    /// SHA-256 of the configuration file, if one was used
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub config_hash: Option<String>,

    /// One entry per requested URL, in request order
    pub pages: Vec<PageReport>,
}

impl AnalysisReport {
    /// Creates a report stamped with the current time
    pub fn new(pages: Vec<PageReport>, config_hash: Option<String>) -> Self {
        Self {
            generated_at: Utc::now(),
            config_hash,
            pages,
        }
    }

    /// Number of pages analysed successfully
    pub fn succeeded(&self) -> usize {
        self.pages.iter().filter(|page| page.is_success()).count()
    }

    /// Number of pages that failed
    pub fn failed(&self) -> usize {
        self.pages.len() - self.succeeded()
    }
}

/// Renders a report in the requested format
pub fn render_report(report: &AnalysisReport, format: OutputFormat) -> OutputResult<String> {
    match format {
        OutputFormat::Json => Ok(format_json(report)?),
        OutputFormat::Markdown => Ok(format_markdown(report)),
    }
}

/// Writes a rendered report to `path`, or to stdout when no path is given
pub fn write_report(
    report: &AnalysisReport,
    format: OutputFormat,
    path: Option<&Path>,
) -> OutputResult<()> {
    let rendered = render_report(report, format)?;

    match path {
        Some(path) => {
            let mut file = File::create(path)?;
            file.write_all(rendered.as_bytes())?;
            tracing::info!("Report written to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(rendered.as_bytes())?;
            handle.write_all(b"\n")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::PageOutcome;

    fn failed_page(url: &str) -> PageReport {
        PageReport {
            url: url.to_string(),
            outcome: PageOutcome::Failed {
                error: "boom".to_string(),
            },
        }
    }

    #[test]
    fn test_counts() {
        let report = AnalysisReport::new(vec![failed_page("https://a.test")], None);
        assert_eq!(report.succeeded(), 0);
        assert_eq!(report.failed(), 1);
    }

    #[test]
    fn test_write_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let report = AnalysisReport::new(vec![failed_page("https://a.test")], None);

        write_report(&report, OutputFormat::Json, Some(&path)).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let parsed: AnalysisReport = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_write_report_bad_path() {
        let report = AnalysisReport::new(vec![], None);
        let result = write_report(
            &report,
            OutputFormat::Markdown,
            Some(Path::new("/nonexistent/dir/report.md")),
        );
        assert!(matches!(result, Err(OutputError::Io(_))));
    }
}
