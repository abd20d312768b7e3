//! Structured-data writer.

use super::ExportError;
use crate::report::AnalysisResults;
use std::path::Path;

/// Writes `results` as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`ExportError`] if serialisation or the write fails.
pub fn save_report_json(results: &AnalysisResults, path: &Path) -> Result<(), ExportError> {
    let json = serde_json::to_string_pretty(results)?;
    std::fs::write(path, json).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })
}
