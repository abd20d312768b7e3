//! Tabular (`.xlsx`) writer.

use super::ExportError;
use crate::report::{AnalysisResults, ReportKind};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

/// Longest text written into a single cell.
pub const MAX_CELL_CHARS: usize = 32_000;

/// Longest sheet name accepted by spreadsheet applications.
const MAX_SHEET_NAME_CHARS: usize = 31;

const SUMMARY_HEADERS: [&str; 5] = [
    "Analysis Date",
    "Country",
    "Locations Analyzed",
    "Total Reports Generated",
    "Report Types",
];

const REPORT_HEADERS: [&str; 4] = ["Report Type", "Generated", "Subject", "Content"];

/// Writes a workbook with a `Summary` sheet and one sheet per report kind.
///
/// # Errors
///
/// Returns [`ExportError::Spreadsheet`] if the workbook cannot be built or
/// saved.
pub fn export_spreadsheet(results: &AnalysisResults, path: &Path) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    write_summary(workbook.add_worksheet(), results, &header)?;
    for kind in results.reports.kinds() {
        write_report_sheet(workbook.add_worksheet(), results, kind, &header)?;
    }

    workbook.save(path)?;
    Ok(())
}

fn write_summary(
    sheet: &mut Worksheet,
    results: &AnalysisResults,
    header: &Format,
) -> Result<(), ExportError> {
    sheet.set_name("Summary")?;
    write_headers(sheet, &SUMMARY_HEADERS, header)?;

    let report_types = results
        .reports
        .kinds()
        .iter()
        .map(|kind| kind.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    sheet.write_string(1, 0, results.analysis_timestamp.to_rfc3339())?;
    sheet.write_string(1, 1, truncate_cell(&results.country))?;
    sheet.write_string(1, 2, truncate_cell(&results.locations_analyzed.join(", ")))?;
    sheet.write_number(1, 3, results.report_count() as f64)?;
    sheet.write_string(1, 4, report_types)?;
    Ok(())
}

fn write_report_sheet(
    sheet: &mut Worksheet,
    results: &AnalysisResults,
    kind: ReportKind,
    header: &Format,
) -> Result<(), ExportError> {
    sheet.set_name(sheet_name(kind.title()))?;
    write_headers(sheet, &REPORT_HEADERS, header)?;

    for (row, entry) in (1u32..).zip(results.reports.of_kind(kind)) {
        sheet.write_string(row, 0, kind.as_str())?;
        sheet.write_string(row, 1, entry.timestamp.to_rfc3339())?;
        sheet.write_string(row, 2, entry.subject().unwrap_or_default())?;
        sheet.write_string(row, 3, truncate_cell(&entry.outcome.text()))?;
    }
    Ok(())
}

fn write_headers(sheet: &mut Worksheet, headers: &[&str], format: &Format) -> Result<(), ExportError> {
    for (col, title) in (0u16..).zip(headers) {
        sheet.write_string_with_format(0, col, *title, format)?;
    }
    Ok(())
}

/// Truncates `text` to [`MAX_CELL_CHARS`] characters.
#[must_use]
pub fn truncate_cell(text: &str) -> String {
    match text.char_indices().nth(MAX_CELL_CHARS) {
        Some((end, _)) => text[..end].to_string(),
        None => text.to_string(),
    }
}

/// Builds a valid sheet name: forbidden characters become spaces and the
/// result is capped at 31 characters.
fn sheet_name(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .map(|c| match c {
            '[' | ']' | ':' | '*' | '?' | '/' | '\\' => ' ',
            other => other,
        })
        .take(MAX_SHEET_NAME_CHARS)
        .collect();
    cleaned.trim_matches(|c: char| c == '\'' || c.is_whitespace()).to_string()
}
