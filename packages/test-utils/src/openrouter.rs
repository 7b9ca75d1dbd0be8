//! Mock OpenRouter server for testing mood analysis
//!
//! Provides a [`MockOpenRouterServer`] that simulates the chat completion
//! endpoint without a real API key.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path of the chat completion endpoint, relative to [`MockOpenRouterServer::url`]
const CHAT_COMPLETIONS_PATH: &str = "/api/v1/chat/completions";

/// Mock OpenRouter server
///
/// Wraps a [`wiremock::MockServer`]; point `OpenRouterConfig::url` at
/// [`MockOpenRouterServer::url`].
pub struct MockOpenRouterServer {
    server: MockServer,
}

impl MockOpenRouterServer {
    /// Start a new mock OpenRouter server
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL to use as `OpenRouterConfig::url`
    pub fn url(&self) -> String {
        format!("{}/api/v1", self.server.uri())
    }

    /// Mount a successful completion whose first choice carries `content`
    pub async fn mock_completion_success(&self, content: &str) {
        Mock::given(method("POST"))
            .and(path(CHAT_COMPLETIONS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "gen-mock",
                "model": "mistralai/mistral-7b-instruct:free",
                "choices": [{
                    "index": 0,
                    "message": {"role": "assistant", "content": content},
                    "finish_reason": "stop"
                }]
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a successful completion carrying a recommendation payload,
    /// wrapped in the kind of prose models add around JSON
    pub async fn mock_recommendations(&self, payload: serde_json::Value) {
        let content = format!(
            "Here is a playlist for you:\n\n{}\n\nEnjoy the music!",
            payload
        );
        self.mock_completion_success(&content).await;
    }

    /// Mount a completion failure with the given status code
    pub async fn mock_completion_failure(&self, status_code: u16, error_message: &str) {
        Mock::given(method("POST"))
            .and(path(CHAT_COMPLETIONS_PATH))
            .respond_with(ResponseTemplate::new(status_code).set_body_json(json!({
                "error": {"code": status_code, "message": error_message}
            })))
            .mount(&self.server)
            .await;
    }

    /// Number of chat completion requests received so far
    pub async fn completion_calls(&self) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| r.url.path() == CHAT_COMPLETIONS_PATH)
            .count()
    }

    /// Get reference to the underlying mock server for custom mock setups
    pub fn inner(&self) -> &MockServer {
        &self.server
    }
}
