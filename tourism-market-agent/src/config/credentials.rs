//! API credential resolution.

use super::{ApiSettings, ConfigError};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Resolves the API key.
///
/// Precedence: explicit value, then `api-key` from the config file, then
/// [`API_KEY_ENV`]. Blank values are treated as absent.
///
/// # Errors
///
/// Returns [`ConfigError::MissingCredential`] when no source provides a key.
pub fn resolve_api_key(explicit: Option<&str>, api: &ApiSettings) -> Result<String, ConfigError> {
    explicit
        .map(str::to_owned)
        .filter(|key| !key.trim().is_empty())
        .or_else(|| api.api_key.clone().filter(|key| !key.trim().is_empty()))
        .or_else(|| {
            std::env::var(API_KEY_ENV)
                .ok()
                .filter(|key| !key.trim().is_empty())
        })
        .ok_or(ConfigError::MissingCredential { env: API_KEY_ENV })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_key_wins() {
        temp_env::with_var(API_KEY_ENV, Some("from-env"), || {
            let api = ApiSettings {
                api_key: Some("from-file".to_string()),
                ..ApiSettings::default()
            };
            assert_eq!(resolve_api_key(Some("explicit"), &api).unwrap(), "explicit");
        });
    }

    #[test]
    fn config_key_wins_over_env() {
        temp_env::with_var(API_KEY_ENV, Some("from-env"), || {
            let api = ApiSettings {
                api_key: Some("from-file".to_string()),
                ..ApiSettings::default()
            };
            assert_eq!(resolve_api_key(None, &api).unwrap(), "from-file");
        });
    }

    #[test]
    fn falls_back_to_env() {
        temp_env::with_var(API_KEY_ENV, Some("from-env"), || {
            assert_eq!(
                resolve_api_key(Some("  "), &ApiSettings::default()).unwrap(),
                "from-env"
            );
        });
    }

    #[test]
    fn missing_everywhere_is_an_error() {
        temp_env::with_var_unset(API_KEY_ENV, || {
            let error = resolve_api_key(None, &ApiSettings::default()).unwrap_err();
            assert!(matches!(error, ConfigError::MissingCredential { .. }));
        });
    }
}
