//! API server configuration

use std::env;

use anyhow::{Context, Result};
use moodwave_shared_config::{
    CommonConfig, Environment, OpenRouterConfig, SpotifyConfig, DEFAULT_LOG_LEVEL,
};
use tracing_subscriber::EnvFilter;

/// Default listening port
pub const DEFAULT_PORT: u16 = 5000;

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Common configuration shared with the client crates
    pub common: CommonConfig,

    /// Server port (default: 5000)
    pub port: u16,

    /// CORS allowed origins (optional)
    pub cors_allowed_origins: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Missing credentials never abort startup; see
    /// [`Config::warn_missing_credentials`].
    pub fn from_env() -> Result<Self> {
        let common = CommonConfig::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

        Ok(Self {
            common,

            port: match env::var("PORT") {
                Ok(port) => port.parse().context("Invalid PORT value")?,
                Err(_) => DEFAULT_PORT,
            },

            cors_allowed_origins: env::var("CORS_ORIGINS").ok().map(|s| {
                s.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            }),
        })
    }

    /// Log a warning for each upstream without credentials
    ///
    /// Without an OpenRouter key every mood request fails upstream; without
    /// Spotify credentials every playlist comes back empty.
    pub fn warn_missing_credentials(&self) {
        if !self.common.openrouter.has_api_key() {
            tracing::warn!("OPENROUTER_API_KEY not set, mood analysis requests will fail");
        }
        if !self.common.has_spotify() {
            tracing::warn!("SPOTIFY_CLIENT_ID not set, playlists will be empty");
        }
    }

    /// Tracing filter built from the configured log level
    ///
    /// Falls back to [`DEFAULT_LOG_LEVEL`] when the directives do not parse.
    pub fn log_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.common.log_level).unwrap_or_else(|e| {
            eprintln!(
                "Invalid log level '{}' ({}), using '{}'",
                self.common.log_level, e, DEFAULT_LOG_LEVEL
            );
            EnvFilter::new(DEFAULT_LOG_LEVEL)
        })
    }

    /// Get OpenRouter configuration
    pub fn openrouter(&self) -> &OpenRouterConfig {
        &self.common.openrouter
    }

    /// Get Spotify configuration
    pub fn spotify(&self) -> &SpotifyConfig {
        &self.common.spotify
    }

    /// Get current environment
    pub fn environment(&self) -> Environment {
        self.common.environment
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.common.environment.is_production()
    }
}
