//! OpenRouter HTTP client with connection pooling
//!
//! Requests are sent once; there is no retry policy.

use std::time::Duration;

use moodwave_shared_config::OpenRouterConfig;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::error::{OpenRouterError, OpenRouterResult};
use crate::models::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

/// Maximum error body size kept in `ApiError`
const MAX_ERROR_BODY_SIZE: usize = 1000;

/// OpenRouter chat completion client
#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    /// HTTP client with connection pool
    http_client: Client,
    /// Configuration
    config: OpenRouterConfig,
}

impl OpenRouterClient {
    /// Create a new OpenRouter client from configuration
    pub fn new(config: &OpenRouterConfig) -> OpenRouterResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(OpenRouterError::HttpError)?;

        Ok(Self::with_client(config, http_client))
    }

    /// Create a client with custom HTTP client (for testing)
    pub fn with_client(config: &OpenRouterConfig, http_client: Client) -> Self {
        Self {
            http_client,
            config: config.clone(),
        }
    }

    /// Truncate error body to keep log lines and error values bounded
    /// Safely handles UTF-8 boundaries to avoid panics on multi-byte characters
    fn truncate_error_body(body: String) -> String {
        if body.len() <= MAX_ERROR_BODY_SIZE {
            return body;
        }

        let truncate_at = body
            .char_indices()
            .map(|(i, _)| i)
            .take_while(|i| *i <= MAX_ERROR_BODY_SIZE)
            .last()
            .unwrap_or(0);

        format!("{}... (truncated)", &body[..truncate_at])
    }

    /// Send a single-turn chat completion and return the first choice's text
    ///
    /// # Errors
    /// - `OpenRouterError::ApiError` - the API answered with a non-success status
    /// - `OpenRouterError::Timeout` - the request exceeded the configured timeout
    /// - `OpenRouterError::HttpError` - the request could not be sent or the body read
    /// - `OpenRouterError::InvalidResponse` - the response carried no choices
    #[instrument(skip(self, prompt), fields(model = %self.config.model, prompt_len = prompt.len()))]
    pub async fn complete(&self, prompt: &str) -> OpenRouterResult<String> {
        self.chat(vec![ChatMessage::user(prompt)]).await
    }

    /// Send a chat completion with the configured model and temperature
    pub async fn chat(&self, messages: Vec<ChatMessage>) -> OpenRouterResult<String> {
        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages,
            temperature: self.config.temperature,
        };

        debug!(
            message_count = request.messages.len(),
            "Sending chat completion request"
        );

        let response = self
            .http_client
            .post(self.config.chat_url())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    OpenRouterError::Timeout(self.config.timeout_secs)
                } else {
                    OpenRouterError::HttpError(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = Self::truncate_error_body(response.text().await.unwrap_or_default());
            return Err(OpenRouterError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        let completion: ChatCompletionResponse = serde_json::from_str(&text)?;

        let content = completion
            .first_content()
            .ok_or_else(|| OpenRouterError::InvalidResponse("no choices returned".to_string()))?
            .to_string();

        debug!(response_len = content.len(), "Chat completion received");

        Ok(content)
    }
}
