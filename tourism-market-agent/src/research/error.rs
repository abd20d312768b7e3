//! Research error types.

use crate::client::ClientError;
use crate::config::ConfigError;
use crate::governor::GovernorError;
use crate::prompts::PromptError;

/// Errors that stop a research operation.
///
/// Remote call failures are not errors here; they are recorded in the
/// affected report entry.
#[derive(Debug, thiserror::Error)]
pub enum ResearchError {
    /// The daily quota ran out.
    #[error(transparent)]
    QuotaExhausted(#[from] GovernorError),

    /// The daily quota cannot cover the plan, so nothing was issued.
    #[error("Plan needs {required} calls but only {remaining} remain in the daily quota")]
    InsufficientQuota { required: usize, remaining: u32 },

    /// Neither the caller nor the configuration named any location.
    #[error("No locations to analyze")]
    NoLocations,

    /// A prompt failed to render.
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// Configuration or credentials were unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The chat client could not be constructed.
    #[error("Failed to build chat client: {0}")]
    Client(#[source] ClientError),
}
