//! Shared configuration types for Moodwave services
//!
//! This crate provides the configuration for the two upstream services the
//! playlist pipeline talks to, plus the environment mode shared by every
//! binary in the workspace.

mod error;
mod openrouter;
mod spotify;

pub use error::{ConfigError, ConfigResult};
pub use openrouter::{
    OpenRouterConfig, DEFAULT_OPENROUTER_MODEL, DEFAULT_OPENROUTER_TEMPERATURE,
    DEFAULT_OPENROUTER_URL,
};
pub use spotify::{
    SpotifyConfig, DEFAULT_SPOTIFY_ACCOUNTS_URL, DEFAULT_SPOTIFY_API_URL,
    DEFAULT_SPOTIFY_REDIRECT_URI,
};

use std::env;

/// Log filter used when neither `RUST_LOG` nor `LOG_LEVEL` is set
pub const DEFAULT_LOG_LEVEL: &str = "info,moodwave_api=debug,tower_http=debug";

/// Common configuration shared between all services
#[derive(Debug, Clone)]
pub struct CommonConfig {
    /// LLM recommendation service configuration
    pub openrouter: OpenRouterConfig,

    /// Music catalog configuration
    pub spotify: SpotifyConfig,

    /// Environment mode (development, staging, production)
    pub environment: Environment,

    /// Log filter directives (from RUST_LOG or LOG_LEVEL)
    pub log_level: String,
}

/// Application environment mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl std::str::FromStr for Environment {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "staging" | "stage" => Self::Staging,
            _ => Self::Development,
        })
    }
}

impl Environment {
    /// Check if this is a production environment
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Staging => write!(f, "staging"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl CommonConfig {
    /// Load common configuration from environment variables
    ///
    /// Reads a `.env` file first if one is present.
    pub fn from_env() -> ConfigResult<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            openrouter: OpenRouterConfig::from_env()?,
            spotify: SpotifyConfig::from_env()?,
            environment: get_env_or_default("ENVIRONMENT", "development")
                .parse()
                .unwrap_or_default(),
            log_level: env::var("RUST_LOG")
                .or_else(|_| env::var("LOG_LEVEL"))
                .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
        })
    }

    /// Check if catalog credentials are configured
    pub fn has_spotify(&self) -> bool {
        self.spotify.is_configured()
    }
}

/// Helper function to get an optional environment variable, treating an
/// empty value as unset
pub fn get_optional_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.is_empty())
}

/// Helper function to get an optional environment variable with a default
pub fn get_env_or_default(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Helper function to parse an environment variable into a specific type
pub fn parse_env<T>(name: &str, default: T) -> ConfigResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(val) => val
            .parse()
            .map_err(|e| ConfigError::InvalidValue(name.to_string(), format!("{}", e))),
        Err(_) => Ok(default),
    }
}
