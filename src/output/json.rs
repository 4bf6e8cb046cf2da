use crate::output::AnalysisReport;

/// Formats a report as pretty-printed JSON
pub fn format_json(report: &AnalysisReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
