//! Rate-governed chat-completion client.
//!
//! Every request is preceded by a permit from the shared [`RateGovernor`].
//! A `429 Too Many Requests` reply is retried exactly once after a fixed
//! cooldown; the retry goes through the full permit/request cycle again.

mod error;
mod wire;

pub use error::ClientError;

use crate::config::ApiSettings;
use crate::governor::RateGovernor;
use reqwest::StatusCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;
use wire::{ChatRequest, ChatResponse};

/// Reply to a single request.
enum Reply {
    Content(String),
    Throttled(String),
}

/// Client for an OpenAI-compatible chat-completion endpoint.
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    endpoint: Url,
    api_key: String,
    model: String,
    temperature: f64,
    max_tokens: u32,
    retry_cooldown: Duration,
    governor: Arc<RateGovernor>,
}

impl ChatClient {
    /// Creates a client that gates every request through `governor`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] for an unusable base URL and
    /// [`ClientError::Build`] if the HTTP client cannot be constructed.
    pub fn new(
        api: &ApiSettings,
        api_key: String,
        governor: Arc<RateGovernor>,
    ) -> Result<Self, ClientError> {
        let endpoint = completions_endpoint(&api.base_url)?;
        let http = reqwest::Client::builder()
            .timeout(api.timeout())
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self {
            http,
            endpoint,
            api_key,
            model: api.model.clone(),
            temperature: api.temperature,
            max_tokens: api.max_tokens,
            retry_cooldown: api.retry_cooldown(),
            governor,
        })
    }

    /// Sets the cooldown applied before retrying a throttled call.
    #[must_use]
    pub fn with_retry_cooldown(mut self, retry_cooldown: Duration) -> Self {
        self.retry_cooldown = retry_cooldown;
        self
    }

    /// Returns the governor gating this client.
    pub fn governor(&self) -> &Arc<RateGovernor> {
        &self.governor
    }

    /// Sends `prompt` as a single user message and returns the reply text.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::QuotaExhausted`] when the daily quota is used
    /// up, [`ClientError::RateLimited`] when the retry is throttled too, and
    /// other variants for transport or protocol failures.
    pub async fn complete(&self, prompt: &str) -> Result<String, ClientError> {
        match self.send(prompt).await? {
            Reply::Content(content) => Ok(content),
            Reply::Throttled(_) => {
                warn!(
                    cooldown_ms = self.retry_cooldown.as_millis() as u64,
                    "Rate limited by server, retrying once after cooldown"
                );
                tokio::time::sleep(self.retry_cooldown).await;

                match self.send(prompt).await? {
                    Reply::Content(content) => Ok(content),
                    Reply::Throttled(body) => Err(ClientError::RateLimited { body }),
                }
            }
        }
    }

    async fn send(&self, prompt: &str) -> Result<Reply, ClientError> {
        self.governor.acquire_permit().await?;

        let request = ChatRequest::user(&self.model, prompt, self.temperature, self.max_tokens);
        debug!(endpoint = %self.endpoint, model = %self.model, "Sending chat completion");

        let response = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Ok(Reply::Throttled(body));
        }
        if status != StatusCode::OK {
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| ClientError::MalformedResponse(e.to_string()))?;
        parsed
            .into_content()
            .map(Reply::Content)
            .ok_or_else(|| ClientError::MalformedResponse("no completion content".to_string()))
    }
}

/// Appends `chat/completions` to the base URL, keeping its path.
fn completions_endpoint(base_url: &str) -> Result<Url, ClientError> {
    let mut base = Url::parse(base_url)?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base.join("chat/completions")?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::governor::GovernorError;
    use serde_json::json;
    use std::num::NonZeroU32;
    use std::time::Instant;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn completion(content: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": content } }]
        }))
    }

    fn client(server: &MockServer, per_day: u32) -> ChatClient {
        let api = ApiSettings {
            base_url: server.uri(),
            ..ApiSettings::default()
        };
        let governor = Arc::new(RateGovernor::new(
            NonZeroU32::new(100).unwrap(),
            NonZeroU32::new(per_day).unwrap(),
        ));
        ChatClient::new(&api, "test-key".to_string(), governor)
            .unwrap()
            .with_retry_cooldown(Duration::from_millis(200))
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let endpoint = completions_endpoint("https://api.groq.com/openai/v1").unwrap();
        assert_eq!(
            endpoint.as_str(),
            "https://api.groq.com/openai/v1/chat/completions"
        );

        let endpoint = completions_endpoint("http://localhost:8080/").unwrap();
        assert_eq!(endpoint.as_str(), "http://localhost:8080/chat/completions");
    }

    #[tokio::test]
    async fn complete_sends_authenticated_user_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(json!({
                "model": "llama3-8b-8192",
                "messages": [{ "role": "user", "content": "Describe Ella" }],
                "temperature": 0.7,
                "max_tokens": 2000
            })))
            .respond_with(completion("Ella is a hill town."))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server, 10);
        let content = client.complete("Describe Ella").await.unwrap();

        assert_eq!(content, "Ella is a hill town.");
        assert_eq!(client.governor().quota_snapshot().daily_used, 1);
    }

    #[tokio::test]
    async fn throttled_call_is_retried_once_after_cooldown() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
            .up_to_n_times(1)
            .with_priority(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .respond_with(completion("after retry"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server, 10);
        let started = Instant::now();
        let content = client.complete("prompt").await.unwrap();

        assert_eq!(content, "after retry");
        assert!(started.elapsed() >= Duration::from_millis(200));
        assert_eq!(client.governor().quota_snapshot().daily_used, 2);
    }

    #[tokio::test]
    async fn second_throttle_is_surfaced_without_further_retry() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
            .expect(2)
            .mount(&server)
            .await;

        let client = client(&server, 10);
        let error = client.complete("prompt").await.unwrap_err();

        assert!(matches!(error, ClientError::RateLimited { ref body } if body == "slow down"));
        assert_eq!(error.to_string(), "API error: 429 - slow down");
    }

    #[tokio::test]
    async fn other_statuses_are_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server, 10);
        let error = client.complete("prompt").await.unwrap_err();

        assert!(matches!(error, ClientError::Status { status: 401, .. }));
        assert_eq!(error.to_string(), "API error: 401 - invalid api key");
    }

    #[tokio::test]
    async fn missing_content_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
            .mount(&server)
            .await;

        let client = client(&server, 10);
        let error = client.complete("prompt").await.unwrap_err();

        assert!(matches!(error, ClientError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn exhausted_quota_issues_no_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(completion("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server, 1);
        client.complete("first").await.unwrap();
        let error = client.complete("second").await.unwrap_err();

        assert!(matches!(
            error,
            ClientError::QuotaExhausted(GovernorError::QuotaExhausted { limit: 1 })
        ));
    }
}
