//! Spotify Web API configuration types

use crate::{get_env_or_default, get_optional_env, parse_env, ConfigError, ConfigResult};

/// Default Spotify Web API base URL
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";

/// Default Spotify accounts service URL (token endpoint host)
pub const DEFAULT_SPOTIFY_ACCOUNTS_URL: &str = "https://accounts.spotify.com";

/// Default OAuth redirect URI registered with the Spotify application
pub const DEFAULT_SPOTIFY_REDIRECT_URI: &str = "http://localhost:5000/callback";

/// Default request timeout in seconds
pub const DEFAULT_SPOTIFY_TIMEOUT_SECS: u64 = 10;

/// Spotify catalog search configuration
///
/// Credentials are optional: without them every lookup fails and playlists
/// come back empty, which the health route reports.
#[derive(Clone)]
pub struct SpotifyConfig {
    /// Application client ID
    pub client_id: Option<String>,

    /// Application client secret
    pub client_secret: Option<String>,

    /// Web API base URL
    pub api_url: String,

    /// Accounts service base URL
    pub accounts_url: String,

    /// Redirect URI registered for the OAuth callback route
    pub redirect_uri: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl SpotifyConfig {
    /// Load Spotify configuration from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        let timeout_secs = parse_env("SPOTIFY_TIMEOUT", DEFAULT_SPOTIFY_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "SPOTIFY_TIMEOUT".to_string(),
                "must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            client_id: get_optional_env("SPOTIFY_CLIENT_ID"),
            client_secret: get_optional_env("SPOTIFY_CLIENT_SECRET"),
            api_url: get_env_or_default("SPOTIFY_API_URL", DEFAULT_SPOTIFY_API_URL),
            accounts_url: get_env_or_default("SPOTIFY_ACCOUNTS_URL", DEFAULT_SPOTIFY_ACCOUNTS_URL),
            redirect_uri: get_env_or_default("SPOTIFY_REDIRECT_URI", DEFAULT_SPOTIFY_REDIRECT_URI),
            timeout_secs,
        })
    }

    /// Create a configuration pointing both API and accounts hosts at one
    /// base URL (useful for testing against a single mock server)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            api_url: format!("{}/v1", base_url.trim_end_matches('/')),
            accounts_url: base_url,
            ..Self::default()
        }
    }

    /// Set client credentials
    pub fn with_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.client_id = Some(client_id.into());
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Whether a client ID has been configured
    pub fn is_configured(&self) -> bool {
        self.client_id.is_some()
    }

    /// Get the full URL for the client-credentials token endpoint
    pub fn token_url(&self) -> String {
        format!("{}/api/token", self.accounts_url.trim_end_matches('/'))
    }

    /// Get the full URL for the search endpoint
    pub fn search_url(&self) -> String {
        format!("{}/search", self.api_url.trim_end_matches('/'))
    }
}

impl Default for SpotifyConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            api_url: DEFAULT_SPOTIFY_API_URL.to_string(),
            accounts_url: DEFAULT_SPOTIFY_ACCOUNTS_URL.to_string(),
            redirect_uri: DEFAULT_SPOTIFY_REDIRECT_URI.to_string(),
            timeout_secs: DEFAULT_SPOTIFY_TIMEOUT_SECS,
        }
    }
}

impl std::fmt::Debug for SpotifyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpotifyConfig")
            .field("client_id", &self.client_id)
            .field(
                "client_secret",
                &self.client_secret.as_ref().map(|_| "[REDACTED]"),
            )
            .field("api_url", &self.api_url)
            .field("accounts_url", &self.accounts_url)
            .field("redirect_uri", &self.redirect_uri)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
