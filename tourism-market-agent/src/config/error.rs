//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading configuration or credentials.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse config '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// A setting holds an unusable value.
    #[error("Invalid value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    /// No API credential was supplied.
    #[error("API key not configured; pass it explicitly, set api-key in config.toml, or set {env}")]
    MissingCredential { env: &'static str },
}
