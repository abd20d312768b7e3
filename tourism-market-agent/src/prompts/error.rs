//! Prompt rendering error types.

/// Prompt rendering error.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// Handlebars rendering error.
    #[error("Prompt rendering error: {0}")]
    RenderError(#[from] handlebars::RenderError),

    /// Template registration error.
    #[error("Prompt registration error: {0}")]
    RegistrationError(#[from] handlebars::TemplateError),

    /// Preferences could not be serialised into the prompt.
    #[error("Failed to serialise preferences: {0}")]
    Preferences(#[from] serde_json::Error),
}
