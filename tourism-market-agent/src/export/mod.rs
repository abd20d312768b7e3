//! Report file writers.
//!
//! Each writer takes a finished [`AnalysisResults`] and a path.
//! [`save_all_formats`] writes every format side by side and skips any
//! writer that fails.

mod error;
mod json;
mod spreadsheet;
mod text;

pub use error::ExportError;
pub use json::save_report_json;
pub use spreadsheet::{export_spreadsheet, truncate_cell, MAX_CELL_CHARS};
pub use text::{render_text_report, save_report_txt};

use crate::report::AnalysisResults;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Json,
    Spreadsheet,
}

impl ExportFormat {
    /// Every format, in the order [`save_all_formats`] writes them.
    pub const ALL: [Self; 3] = [Self::Text, Self::Json, Self::Spreadsheet];

    /// File extension without the dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
            Self::Spreadsheet => "xlsx",
        }
    }

    /// Writes `results` to `path` in this format.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] if the writer fails.
    pub fn write(self, results: &AnalysisResults, path: &Path) -> Result<(), ExportError> {
        match self {
            Self::Text => save_report_txt(results, path),
            Self::Json => save_report_json(results, path),
            Self::Spreadsheet => export_spreadsheet(results, path),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Text => "text",
            Self::Json => "JSON",
            Self::Spreadsheet => "spreadsheet",
        };
        f.write_str(label)
    }
}

/// Builds `<country_slug>_tourism_report_<YYYYmmdd_HHMMSS>` from the
/// run's timestamp.
#[must_use]
pub fn default_base_name(results: &AnalysisResults) -> String {
    format!(
        "{}_tourism_report_{}",
        slugify(&results.country),
        results.analysis_timestamp.format("%Y%m%d_%H%M%S")
    )
}

/// Writes every format into `dir`, creating it if needed.
///
/// A writer that fails is logged and skipped. Returns the files that were
/// written.
pub fn save_all_formats(
    results: &AnalysisResults,
    dir: &Path,
    base_name: Option<&str>,
) -> Vec<(ExportFormat, PathBuf)> {
    if let Err(e) = std::fs::create_dir_all(dir) {
        warn!(dir = %dir.display(), error = %e, "Could not create output directory");
        return Vec::new();
    }

    let base = base_name.map_or_else(|| default_base_name(results), str::to_string);
    let mut written = Vec::with_capacity(ExportFormat::ALL.len());

    for format in ExportFormat::ALL {
        let path = dir.join(format!("{base}.{}", format.extension()));
        match format.write(results, &path) {
            Ok(()) => {
                info!(format = %format, path = %path.display(), "Report saved");
                written.push((format, path));
            }
            Err(e) => warn!(format = %format, error = %e, "Failed to save report"),
        }
    }

    written
}

fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.trim().chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.ends_with('_') {
            slug.push('_');
        }
    }
    slug.trim_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{CallOutcome, ReportEntry, ReportKind};
    use tempfile::TempDir;

    fn results() -> AnalysisResults {
        let mut results = AnalysisResults::new("Sri Lanka", &["Ella".to_string()]);
        results.reports.insert(ReportEntry::new(
            ReportKind::MarketTrends,
            CallOutcome::Completed {
                content: "trends".to_string(),
            },
        ));
        results
    }

    #[test]
    fn slugify_lowercases_and_joins_words() {
        assert_eq!(slugify("Sri Lanka"), "sri_lanka");
        assert_eq!(slugify("  Côte d'Ivoire "), "côte_d_ivoire");
    }

    #[test]
    fn default_base_name_uses_country_and_timestamp() {
        let results = results();
        let expected = format!(
            "sri_lanka_tourism_report_{}",
            results.analysis_timestamp.format("%Y%m%d_%H%M%S")
        );
        assert_eq!(default_base_name(&results), expected);
    }

    #[test]
    fn save_all_formats_writes_each_file() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("reports");

        let written = save_all_formats(&results(), &dir, Some("run"));

        let formats: Vec<_> = written.iter().map(|(format, _)| *format).collect();
        assert_eq!(formats, ExportFormat::ALL);
        for name in ["run.txt", "run.json", "run.xlsx"] {
            assert!(dir.join(name).is_file(), "{name} missing");
        }
    }

    #[test]
    fn failed_writer_is_skipped() {
        let temp = TempDir::new().unwrap();
        // A directory squatting on the text file's path makes that writer fail.
        std::fs::create_dir(temp.path().join("run.txt")).unwrap();

        let written = save_all_formats(&results(), temp.path(), Some("run"));

        let formats: Vec<_> = written.iter().map(|(format, _)| *format).collect();
        assert_eq!(formats, [ExportFormat::Json, ExportFormat::Spreadsheet]);
    }
}
