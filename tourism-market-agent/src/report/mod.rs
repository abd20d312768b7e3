//! Report data model.
//!
//! These types are filled by the research agent and consumed by the
//! exporters.

mod entry;
mod kind;
mod outcome;
mod results;

pub use entry::{format_amount, ReportEntry};
pub use kind::ReportKind;
pub use outcome::CallOutcome;
pub use results::{AnalysisResults, Reports};
