//! Call outcome types.

use serde::Serialize;

/// Result slot of a single call.
///
/// Remote failures are recorded here rather than propagated so a plan can
/// continue past them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CallOutcome {
    /// The model answered.
    Completed {
        /// Reply text.
        content: String,
    },

    /// The call failed.
    Failed {
        /// Error description.
        error: String,
    },
}

impl CallOutcome {
    /// Returns true if the call failed.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Returns the reply text, or the error prefixed with `Error: `.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Completed { content } => content.clone(),
            Self::Failed { error } => format!("Error: {error}"),
        }
    }
}
