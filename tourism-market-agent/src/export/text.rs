//! Human-readable text writer.

use super::ExportError;
use crate::report::{AnalysisResults, ReportEntry};
use std::fmt::{self, Write as _};
use std::path::Path;

const BANNER_WIDTH: usize = 80;
const SECTION_WIDTH: usize = 60;
const DIVIDER_WIDTH: usize = 40;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writes `results` as a sectioned text document.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if the file cannot be written.
pub fn save_report_txt(results: &AnalysisResults, path: &Path) -> Result<(), ExportError> {
    std::fs::write(path, render_text_report(results)).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Renders `results` as a sectioned text document.
#[must_use]
pub fn render_text_report(results: &AnalysisResults) -> String {
    let mut out = String::new();
    // Writing into a String never fails.
    let _ = write_report(&mut out, results);
    out
}

fn write_report(out: &mut String, results: &AnalysisResults) -> fmt::Result {
    let banner = "=".repeat(BANNER_WIDTH);

    writeln!(out, "{banner}")?;
    writeln!(
        out,
        "{} BUDGET TOURISM INVESTMENT ANALYSIS REPORT",
        results.country.to_uppercase()
    )?;
    writeln!(out, "{banner}\n")?;

    writeln!(
        out,
        "Report Generated: {}",
        results.analysis_timestamp.format(TIMESTAMP_FORMAT)
    )?;
    writeln!(
        out,
        "Locations Analyzed: {}",
        results.locations_analyzed.join(", ")
    )?;
    writeln!(out, "Total Reports: {}", results.report_count())?;
    if let Some(error) = &results.error {
        writeln!(out, "Stopped Early: {error}")?;
    }
    writeln!(out)?;

    for entry in results.reports.entries() {
        write_section(out, entry)?;
    }

    writeln!(out, "{banner}")?;
    writeln!(out, "END OF REPORT")?;
    writeln!(out, "{banner}")
}

fn write_section(out: &mut String, entry: &ReportEntry) -> fmt::Result {
    let rule = "=".repeat(SECTION_WIDTH);
    let title = entry.kind.title().to_uppercase();

    writeln!(out, "{rule}")?;
    match &entry.location {
        Some(location) => writeln!(out, "{title} - {location}")?,
        None => writeln!(out, "{title}")?,
    }
    writeln!(out, "{rule}")?;
    writeln!(out, "Generated: {}\n", entry.timestamp.format(TIMESTAMP_FORMAT))?;

    writeln!(out, "{}\n", entry.outcome.text().trim_end())?;
    if let Some(subject) = entry.subject() {
        writeln!(out, "{subject}")?;
    }
    writeln!(out, "\n{}\n", "-".repeat(DIVIDER_WIDTH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{CallOutcome, ReportKind};
    use tempfile::TempDir;

    fn sample_results() -> AnalysisResults {
        let mut results =
            AnalysisResults::new("Sri Lanka", &["Ella".to_string(), "Kandy".to_string()]);
        results.reports.insert(ReportEntry::new(
            ReportKind::MarketTrends,
            CallOutcome::Completed {
                content: "Backpacker arrivals are rising.".to_string(),
            },
        ));
        results.reports.insert(
            ReportEntry::new(
                ReportKind::LocationPotential,
                CallOutcome::Failed {
                    error: "API error: 500 - upstream".to_string(),
                },
            )
            .with_location("Ella"),
        );
        results
    }

    #[test]
    fn renders_header_sections_and_footer() {
        let text = render_text_report(&sample_results());

        assert!(text.starts_with(&"=".repeat(80)));
        assert!(text.contains("SRI LANKA BUDGET TOURISM INVESTMENT ANALYSIS REPORT"));
        assert!(text.contains("Locations Analyzed: Ella, Kandy"));
        assert!(text.contains("Total Reports: 2"));
        assert!(text.contains("MARKET TRENDS\n"));
        assert!(text.contains("Backpacker arrivals are rising."));
        assert!(text.trim_end().ends_with(&"=".repeat(80)));
        assert!(text.contains("END OF REPORT"));
    }

    #[test]
    fn failed_calls_render_their_error() {
        let text = render_text_report(&sample_results());

        assert!(text.contains("LOCATION ANALYSIS - Ella"));
        assert!(text.contains("Error: API error: 500 - upstream"));
        assert!(text.contains("Location: Ella"));
    }

    #[test]
    fn early_stop_is_reported() {
        let mut results = sample_results();
        results.error = Some("Daily request quota of 10 exhausted".to_string());

        let text = render_text_report(&results);
        assert!(text.contains("Stopped Early: Daily request quota of 10 exhausted"));
    }

    #[test]
    fn save_writes_rendered_text() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("report.txt");
        let results = sample_results();

        save_report_txt(&results, &path).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            render_text_report(&results)
        );
    }
}
