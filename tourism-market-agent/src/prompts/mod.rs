//! Prompt catalogue rendered with Handlebars.
//!
//! One template per [`ReportKind`](crate::report::ReportKind), parameterised
//! by country, location(s), budget and preferences.

mod error;
mod renderer;
mod templates;

pub use error::PromptError;
pub use renderer::{create_handlebars_registry, PromptRenderer};
