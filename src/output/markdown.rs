//! Markdown report generation
//!
//! Renders a human-readable summary: one section per page with its markup
//! version, heading table, link counts and inaccessible links.

use crate::analysis::{AnalysisResult, PageOutcome};
use crate::output::AnalysisReport;

/// Formats a report as markdown
pub fn format_markdown(report: &AnalysisReport) -> String {
    let mut md = String::new();

    md.push_str("# Sumi-Lens Analysis Report\n\n");

    md.push_str(&format!(
        "- **Generated**: {}\n",
        report.generated_at.to_rfc3339()
    ));
    if let Some(hash) = &report.config_hash {
        md.push_str(&format!("- **Config Hash**: {}\n", hash));
    }
    md.push_str(&format!(
        "- **Pages**: {} analysed, {} failed\n\n",
        report.succeeded(),
        report.failed()
    ));

    for page in &report.pages {
        md.push_str(&format!("## {}\n\n", page.url));

        match &page.outcome {
            PageOutcome::Analysed { result } => push_result(&mut md, result),
            PageOutcome::Failed { error } => {
                md.push_str(&format!("**Analysis failed**: {}\n\n", error));
            }
        }
    }

    md
}

fn push_result(md: &mut String, result: &AnalysisResult) {
    md.push_str(&format!("- **HTML Version**: {}\n", result.html_version));
    md.push_str(&format!("- **Title**: {}\n", result.title));
    md.push_str(&format!(
        "- **Login Form**: {}\n\n",
        if result.has_login_form { "yes" } else { "no" }
    ));

    md.push_str("### Headings\n\n");
    md.push_str("| Tag | Count |\n");
    md.push_str("|-----|-------|\n");
    for (tag, count) in &result.headings {
        md.push_str(&format!("| {} | {} |\n", tag, count));
    }
    md.push('\n');

    let link = &result.link;
    md.push_str("### Links\n\n");
    md.push_str(&format!("- **Internal**: {}\n", link.internal_links));
    md.push_str(&format!("- **External**: {}\n", link.external_links));
    md.push_str(&format!(
        "- **Inaccessible**: {}\n\n",
        link.inaccessible_link_count
    ));

    if !link.inaccessible_link.is_empty() {
        let mut urls = link.inaccessible_link.clone();
        urls.sort();
        for url in urls {
            md.push_str(&format!("- {}\n", url));
        }
        md.push('\n');
    }
}
