//! Error types for the OpenRouter client

use thiserror::Error;

/// Errors that can occur when interacting with OpenRouter
#[derive(Error, Debug)]
pub enum OpenRouterError {
    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Failed to serialize/deserialize JSON
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// OpenRouter answered with a non-success status
    #[error("OpenRouter API error (status {status}): {body}")]
    ApiError { status: u16, body: String },

    /// Request timeout
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// The completion envelope did not carry any message
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl OpenRouterError {
    /// Whether the upstream answered with a non-success HTTP status
    pub fn is_status_error(&self) -> bool {
        matches!(self, OpenRouterError::ApiError { .. })
    }
}

/// Result type for OpenRouter operations
pub type OpenRouterResult<T> = Result<T, OpenRouterError>;
