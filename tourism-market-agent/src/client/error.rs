//! Chat client error types.

use crate::governor::GovernorError;
use thiserror::Error;

/// Errors that can occur while issuing a chat completion.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The governor refused the call because the daily quota is used up.
    #[error(transparent)]
    QuotaExhausted(#[from] GovernorError),

    /// The base URL could not be turned into an endpoint.
    #[error("Invalid API base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// Network or transport failure.
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server throttled both the call and its single retry.
    #[error("API error: 429 - {body}")]
    RateLimited { body: String },

    /// The server answered with a non-success status.
    #[error("API error: {status} - {body}")]
    Status { status: u16, body: String },

    /// The response did not carry a completion.
    #[error("Malformed API response: {0}")]
    MalformedResponse(String),
}
