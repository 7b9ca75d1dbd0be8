//! Error handling for the Moodwave API
//!
//! Every error reaches the caller as a 500 with a single `{"error": ...}`
//! message. Upstream detail is logged, never returned.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::services::recommendation::RecommendationError;

/// API error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

/// Main API error type
#[derive(Error, Debug)]
pub enum ApiError {
    /// The LLM answered with a non-success status
    #[error("AI analysis failed: {0}")]
    AiAnalysis(String),

    /// No usable JSON could be extracted from the LLM answer
    #[error("Failed to parse AI recommendations: {0}")]
    RecommendationParse(String),

    /// Request body could not be read as a mood request
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// Anything else
    #[error("internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    /// Get the error code string used in logs
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::AiAnalysis(_) => "AI_ANALYSIS_FAILED",
            Self::RecommendationParse(_) => "RECOMMENDATION_PARSE_ERROR",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Message returned to the caller
    pub fn client_message(&self) -> String {
        match self {
            Self::AiAnalysis(_) => "AI analysis failed".to_string(),
            Self::RecommendationParse(_) => "Failed to parse AI recommendations".to_string(),
            Self::InvalidBody(message) | Self::Internal(message) => {
                format!("Server error: {}", message)
            }
        }
    }

    /// Log the error with appropriate severity based on status code
    pub fn log(&self) {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(
                error = %self,
                code = self.error_code(),
                status = status.as_u16(),
                "Error in analyze_mood"
            );
        } else {
            tracing::debug!(
                error = %self,
                code = self.error_code(),
                status = status.as_u16(),
                "Client error"
            );
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();

        let error_response = ErrorResponse {
            error: self.client_message(),
        };

        (self.status_code(), Json(error_response)).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

// ========== Conversion Implementations ==========

impl From<RecommendationError> for ApiError {
    fn from(err: RecommendationError) -> Self {
        match err {
            RecommendationError::Upstream(e) => Self::AiAnalysis(e.to_string()),
            RecommendationError::Parse(reason) => Self::RecommendationParse(reason),
            RecommendationError::Unhandled(e) => Self::Internal(e.to_string()),
        }
    }
}

impl From<axum::extract::rejection::JsonRejection> for ApiError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}
