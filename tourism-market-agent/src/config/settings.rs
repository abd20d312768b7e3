//! Settings sections of `config.toml`.

use crate::governor::RateGovernor;
use serde::Deserialize;
use std::num::NonZeroU32;
use std::time::Duration;

/// Default OpenAI-compatible endpoint (Groq).
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Default chat model.
pub const DEFAULT_MODEL: &str = "llama3-8b-8192";

/// Conservative free-tier per-minute cap.
pub const DEFAULT_REQUESTS_PER_MINUTE: u32 = 30;

/// Conservative free-tier per-day cap.
pub const DEFAULT_REQUESTS_PER_DAY: u32 = 1000;

/// Known budget tourism hotspots used when no locations are given.
pub const DEFAULT_HOTSPOTS: [&str; 12] = [
    "Ella",
    "Kandy",
    "Sigiriya",
    "Arugam Bay",
    "Negombo",
    "Galle",
    "Nuwara Eliya",
    "Anuradhapura",
    "Mirissa",
    "Unawatuna",
    "Trincomalee",
    "Polonnaruwa",
];

/// Chat-completion endpoint settings (`[api]`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ApiSettings {
    /// Base URL of the OpenAI-compatible API.
    pub base_url: String,

    /// Model identifier sent with every request.
    pub model: String,

    /// Decoding temperature (0.0-2.0).
    pub temperature: f64,

    /// Token budget per completion.
    pub max_tokens: u32,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,

    /// Cooldown before the single retry of a throttled call.
    pub retry_cooldown_secs: u64,

    /// API key (optional, falls back to the `GROQ_API_KEY` env var).
    pub api_key: Option<String>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            max_tokens: 2000,
            timeout_secs: 60,
            retry_cooldown_secs: 60,
            api_key: None,
        }
    }
}

impl ApiSettings {
    /// Returns the request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Returns the cooldown applied before retrying a throttled call.
    pub fn retry_cooldown(&self) -> Duration {
        Duration::from_secs(self.retry_cooldown_secs)
    }
}

/// Quota caps of the remote service (`[quota]`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct QuotaSettings {
    /// Sliding per-minute cap.
    pub requests_per_minute: NonZeroU32,

    /// Sliding per-day cap.
    pub requests_per_day: NonZeroU32,
}

impl Default for QuotaSettings {
    fn default() -> Self {
        Self {
            requests_per_minute: NonZeroU32::new(DEFAULT_REQUESTS_PER_MINUTE)
                .unwrap_or(NonZeroU32::MIN),
            requests_per_day: NonZeroU32::new(DEFAULT_REQUESTS_PER_DAY).unwrap_or(NonZeroU32::MIN),
        }
    }
}

impl QuotaSettings {
    /// Builds a governor enforcing these caps.
    #[must_use]
    pub fn governor(&self) -> RateGovernor {
        RateGovernor::new(self.requests_per_minute, self.requests_per_day)
    }
}

/// Research scope (`[research]`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ResearchSettings {
    /// Country the reports cover.
    pub country: String,

    /// Candidate locations, most promising first.
    pub hotspots: Vec<String>,

    /// Number of locations analysed individually by a comprehensive run.
    pub max_location_analyses: usize,
}

impl Default for ResearchSettings {
    fn default() -> Self {
        Self {
            country: "Sri Lanka".to_string(),
            hotspots: DEFAULT_HOTSPOTS.iter().map(|s| (*s).to_string()).collect(),
            max_location_analyses: 3,
        }
    }
}
