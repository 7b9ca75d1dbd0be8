//! OpenRouter LLM configuration types

use crate::{get_env_or_default, get_optional_env, parse_env, ConfigError, ConfigResult};

/// Default OpenRouter API base URL
pub const DEFAULT_OPENROUTER_URL: &str = "https://openrouter.ai/api/v1";

/// Model used for mood analysis
pub const DEFAULT_OPENROUTER_MODEL: &str = "mistralai/mistral-7b-instruct:free";

/// Sampling temperature used for mood analysis
pub const DEFAULT_OPENROUTER_TEMPERATURE: f32 = 0.7;

/// Default request timeout in seconds
pub const DEFAULT_OPENROUTER_TIMEOUT_SECS: u64 = 60;

/// OpenRouter chat completion service configuration
#[derive(Clone)]
pub struct OpenRouterConfig {
    /// Bearer API key (may be empty; the upstream then rejects the call)
    pub api_key: String,

    /// API base URL, without the `/chat/completions` suffix
    pub url: String,

    /// Model identifier sent with every completion request
    pub model: String,

    /// Temperature for generation (0.0 - 2.0)
    pub temperature: f32,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl OpenRouterConfig {
    /// Load OpenRouter configuration from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        let config = Self {
            api_key: get_optional_env("OPENROUTER_API_KEY").unwrap_or_default(),
            url: get_env_or_default("OPENROUTER_URL", DEFAULT_OPENROUTER_URL),
            model: get_env_or_default("OPENROUTER_MODEL", DEFAULT_OPENROUTER_MODEL),
            temperature: parse_env("OPENROUTER_TEMPERATURE", DEFAULT_OPENROUTER_TEMPERATURE)?,
            timeout_secs: parse_env("OPENROUTER_TIMEOUT", DEFAULT_OPENROUTER_TIMEOUT_SECS)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Create a configuration with a custom URL (useful for testing)
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Whether an API key has been configured
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Get the full URL for the chat completion endpoint
    pub fn chat_url(&self) -> String {
        format!("{}/chat/completions", self.url.trim_end_matches('/'))
    }

    fn validate(&self) -> ConfigResult<()> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::InvalidValue(
                "OPENROUTER_TEMPERATURE".to_string(),
                format!("{} is outside 0.0..=2.0", self.temperature),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "OPENROUTER_TIMEOUT".to_string(),
                "must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for OpenRouterConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            url: DEFAULT_OPENROUTER_URL.to_string(),
            model: DEFAULT_OPENROUTER_MODEL.to_string(),
            temperature: DEFAULT_OPENROUTER_TEMPERATURE,
            timeout_secs: DEFAULT_OPENROUTER_TIMEOUT_SECS,
        }
    }
}

impl std::fmt::Debug for OpenRouterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenRouterConfig")
            .field("api_key", &"[REDACTED]")
            .field("url", &self.url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
