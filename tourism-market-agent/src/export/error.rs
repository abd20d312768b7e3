//! Export error types.

use thiserror::Error;

/// Errors that can occur while writing a report file.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to write a file.
    #[error("Failed to write '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialise results.
    #[error("Failed to serialise results: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to build or save the workbook.
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),
}
