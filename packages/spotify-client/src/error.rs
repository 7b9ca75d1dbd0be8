//! Spotify API error types

use thiserror::Error;

/// Spotify API client errors
#[derive(Error, Debug)]
pub enum SpotifyError {
    /// Client ID or secret is not configured
    #[error("Spotify client credentials are not configured")]
    MissingCredentials,

    /// Invalid input provided to API method
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("Failed to parse Spotify response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Token endpoint rejected the client credentials
    #[error("Spotify authentication failed (status {status}): {message}")]
    Auth { status: u16, message: String },

    /// Web API returned an error
    #[error("Spotify API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Rate limited by Spotify
    #[error("Rate limited by Spotify API")]
    RateLimited,

    /// Request timeout
    #[error("Request to Spotify timed out")]
    Timeout,
}

/// Result type for Spotify operations
pub type SpotifyResult<T> = Result<T, SpotifyError>;
