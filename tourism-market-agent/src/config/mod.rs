//! Configuration loading.
//!
//! This module parses `config.toml`, applies environment overrides and
//! validates the result. Every section and key is optional; a missing file
//! yields the defaults.

mod credentials;
mod error;
mod settings;

pub use credentials::{resolve_api_key, API_KEY_ENV};
pub use error::ConfigError;
pub use settings::{
    ApiSettings, QuotaSettings, ResearchSettings, DEFAULT_BASE_URL, DEFAULT_HOTSPOTS,
    DEFAULT_MODEL, DEFAULT_REQUESTS_PER_DAY, DEFAULT_REQUESTS_PER_MINUTE,
};

use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, warn};
use url::Url;

/// Environment variable overriding the configured model.
pub const MODEL_ENV: &str = "TOURISM_AGENT_MODEL";

/// Environment variable overriding the configured temperature.
pub const TEMPERATURE_ENV: &str = "TOURISM_AGENT_TEMPERATURE";

/// Complete agent configuration.
///
/// ```toml
/// [api]
/// base-url = "https://api.groq.com/openai/v1"
/// model = "llama3-8b-8192"
///
/// [quota]
/// requests-per-minute = 30
/// requests-per-day = 1000
///
/// [research]
/// country = "Sri Lanka"
/// hotspots = ["Ella", "Kandy", "Sigiriya"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct AgentConfig {
    /// Chat-completion endpoint settings.
    pub api: ApiSettings,

    /// Remote quota caps.
    pub quota: QuotaSettings,

    /// Research scope.
    pub research: ResearchSettings,
}

impl AgentConfig {
    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist.
    ///
    /// Environment overrides are applied after parsing, then the result is
    /// validated.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed, or if a
    /// value fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            debug!(path = %path.display(), "Loading config");
            let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
                path: path.display().to_string(),
                source: e,
            })?;
            toml::from_str(&contents).map_err(|e| ConfigError::TomlError {
                path: path.display().to_string(),
                source: e,
            })?
        } else {
            info!(path = %path.display(), "Config file not found, using defaults");
            Self::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Applies model and temperature overrides from the environment.
    ///
    /// Environment variables take precedence over the config file. Invalid
    /// values are logged and ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(model) = std::env::var(MODEL_ENV) {
            if !model.trim().is_empty() {
                self.api.model = model;
            }
        }

        if let Ok(value) = std::env::var(TEMPERATURE_ENV) {
            match value.parse::<f64>() {
                Ok(temperature) if is_valid_temperature(temperature) => {
                    self.api.temperature = temperature;
                }
                _ => warn!(
                    "Invalid temperature {value} from environment variable: must be finite and in range 0.0-2.0"
                ),
            }
        }
    }

    /// Checks that every setting is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] naming the first bad key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.api.base_url)
            .map_err(|e| invalid("api.base-url", &e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid("api.base-url", "scheme must be http or https"));
        }
        if self.api.model.trim().is_empty() {
            return Err(invalid("api.model", "must not be empty"));
        }
        if !is_valid_temperature(self.api.temperature) {
            return Err(invalid(
                "api.temperature",
                "must be finite and in range 0.0-2.0",
            ));
        }
        if self.api.max_tokens == 0 {
            return Err(invalid("api.max-tokens", "must be greater than zero"));
        }
        if self.api.timeout_secs == 0 {
            return Err(invalid("api.timeout-secs", "must be greater than zero"));
        }
        if self.research.country.trim().is_empty() {
            return Err(invalid("research.country", "must not be empty"));
        }
        if self.research.hotspots.iter().all(|h| h.trim().is_empty()) {
            return Err(invalid("research.hotspots", "must list at least one location"));
        }
        if self.research.max_location_analyses == 0 {
            return Err(invalid(
                "research.max-location-analyses",
                "must be greater than zero",
            ));
        }
        Ok(())
    }
}

fn is_valid_temperature(value: f64) -> bool {
    value.is_finite() && (0.0..=2.0).contains(&value)
}

fn invalid(key: &str, message: &str) -> ConfigError {
    ConfigError::ValidationError {
        key: key.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(temp: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = temp.path().join("config.toml");
        fs::write(&path, contents).unwrap();
        path
    }

    fn without_overrides<R>(f: impl FnOnce() -> R) -> R {
        temp_env::with_vars_unset([MODEL_ENV, TEMPERATURE_ENV], f)
    }

    #[test]
    fn load_returns_defaults_when_missing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.toml");

        let config = without_overrides(|| AgentConfig::load(&path).unwrap());

        assert_eq!(config, AgentConfig::default());
        assert_eq!(config.quota.requests_per_minute.get(), DEFAULT_REQUESTS_PER_MINUTE);
        assert_eq!(config.quota.requests_per_day.get(), DEFAULT_REQUESTS_PER_DAY);
        assert_eq!(config.research.hotspots.len(), 12);
    }

    #[test]
    fn load_parses_partial_sections() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            &temp,
            r#"
[api]
model = "llama-3.1-8b-instant"
retry-cooldown-secs = 5

[quota]
requests-per-minute = 2
requests-per-day = 10

[research]
country = "Vietnam"
hotspots = ["Hoi An", "Da Lat"]
"#,
        );

        let config = without_overrides(|| AgentConfig::load(&path).unwrap());

        assert_eq!(config.api.model, "llama-3.1-8b-instant");
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.retry_cooldown_secs, 5);
        assert_eq!(config.quota.requests_per_minute.get(), 2);
        assert_eq!(config.quota.requests_per_day.get(), 10);
        assert_eq!(config.research.country, "Vietnam");
        assert_eq!(config.research.hotspots, vec!["Hoi An", "Da Lat"]);
        assert_eq!(config.research.max_location_analyses, 3);
    }

    #[test]
    fn load_rejects_zero_quota() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "[quota]\nrequests-per-minute = 0\n");

        let error = without_overrides(|| AgentConfig::load(&path).unwrap_err());
        assert!(matches!(error, ConfigError::TomlError { .. }));
    }

    #[test]
    fn load_reports_invalid_toml() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "not = [valid");

        let error = without_overrides(|| AgentConfig::load(&path).unwrap_err());
        assert!(matches!(error, ConfigError::TomlError { .. }));
    }

    #[test]
    fn validate_rejects_bad_base_url() {
        let mut config = AgentConfig::default();
        config.api.base_url = "ftp://example.com".to_string();

        let error = config.validate().unwrap_err();
        assert!(
            matches!(error, ConfigError::ValidationError { ref key, .. } if key == "api.base-url")
        );
    }

    #[test]
    fn validate_rejects_out_of_range_temperature() {
        let mut config = AgentConfig::default();
        config.api.temperature = 2.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_hotspots() {
        let mut config = AgentConfig::default();
        config.research.hotspots.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn env_overrides_take_precedence() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "[api]\nmodel = \"from-file\"\ntemperature = 0.3\n");

        let config = temp_env::with_vars(
            [(MODEL_ENV, Some("from-env")), (TEMPERATURE_ENV, Some("0.9"))],
            || AgentConfig::load(&path).unwrap(),
        );

        assert_eq!(config.api.model, "from-env");
        assert_eq!(config.api.temperature, 0.9);
    }

    #[test]
    fn invalid_env_temperature_is_ignored() {
        let mut config = AgentConfig::default();
        config.api.temperature = 0.3;

        temp_env::with_vars(
            [(MODEL_ENV, None), (TEMPERATURE_ENV, Some("7.5"))],
            || config.apply_env_overrides(),
        );

        assert_eq!(config.api.temperature, 0.3);
    }
}
