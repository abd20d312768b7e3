//! Rate governor error types.

use thiserror::Error;

/// Errors raised by the rate governor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GovernorError {
    /// The rolling daily quota is used up.
    ///
    /// Callers must stop the current plan; waiting is never attempted.
    #[error("Daily request quota of {limit} exhausted; resume on the next daily cycle")]
    QuotaExhausted { limit: u32 },
}
