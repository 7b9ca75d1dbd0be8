//! Spotify Web API client implementation

use std::time::Duration;

use moodwave_shared_config::SpotifyConfig;
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, instrument, warn};

use crate::error::{SpotifyError, SpotifyResult};
use crate::models::{AccessToken, AuthErrorResponse, ErrorResponse, SearchResponse, Track};

/// Default connection timeout in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Largest page size accepted by `/search`
const MAX_SEARCH_LIMIT: u32 = 50;

/// Spotify Web API client
///
/// Authenticates with the client-credentials flow. Tokens are not cached
/// here; callers decide how long to keep one.
#[derive(Clone)]
pub struct SpotifyClient {
    http_client: Client,
    config: SpotifyConfig,
}

impl std::fmt::Debug for SpotifyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpotifyClient")
            .field("config", &self.config)
            .finish()
    }
}

impl SpotifyClient {
    /// Create a new Spotify client
    ///
    /// Missing credentials are not an error here: they surface as
    /// `SpotifyError::MissingCredentials` on the first token request.
    pub fn new(config: &SpotifyConfig) -> SpotifyResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
            .pool_max_idle_per_host(5)
            .pool_idle_timeout(Duration::from_secs(90))
            .user_agent("Moodwave/1.0")
            .build()?;

        Ok(Self::with_client(config, http_client))
    }

    /// Create a client with custom HTTP client (for testing)
    pub fn with_client(config: &SpotifyConfig, http_client: Client) -> Self {
        Self {
            http_client,
            config: config.clone(),
        }
    }

    /// Reject blank queries; anything else is sent verbatim
    fn validate_query(query: &str) -> SpotifyResult<&str> {
        if query.trim().is_empty() {
            return Err(SpotifyError::InvalidInput(
                "search query cannot be empty".to_string(),
            ));
        }
        Ok(query)
    }

    fn map_send_error(e: reqwest::Error) -> SpotifyError {
        if e.is_timeout() {
            SpotifyError::Timeout
        } else {
            SpotifyError::Http(e)
        }
    }

    /// Request an app access token with the client-credentials grant
    ///
    /// # Errors
    /// - `SpotifyError::MissingCredentials` - client ID or secret not configured
    /// - `SpotifyError::Auth` - the accounts service rejected the credentials
    /// - `SpotifyError::Http` / `SpotifyError::Timeout` - transport failure
    #[instrument(skip(self))]
    pub async fn request_token(&self) -> SpotifyResult<AccessToken> {
        let (client_id, client_secret) = match (&self.config.client_id, &self.config.client_secret)
        {
            (Some(id), Some(secret)) => (id, secret),
            _ => return Err(SpotifyError::MissingCredentials),
        };

        let response = self
            .http_client
            .post(self.config.token_url())
            .basic_auth(client_id, Some(client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<AuthErrorResponse>(&text)
                .map(|e| e.error_description.unwrap_or(e.error))
                .unwrap_or(text);
            warn!(status = status.as_u16(), "Spotify token request rejected");
            return Err(SpotifyError::Auth {
                status: status.as_u16(),
                message,
            });
        }

        let token: AccessToken = serde_json::from_str(&text)?;
        debug!(expires_in = ?token.expires_in, "Obtained Spotify access token");

        Ok(token)
    }

    /// Parse a non-success Web API response into an error
    async fn api_error(response: Response) -> SpotifyError {
        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            warn!("Spotify API rate limited");
            return SpotifyError::RateLimited;
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&text)
            .map(|e| e.error.message)
            .unwrap_or(text);

        SpotifyError::Api {
            status: status.as_u16(),
            message,
        }
    }

    /// Search the catalog for tracks, best match first
    ///
    /// # Arguments
    /// * `token` - Access token from [`SpotifyClient::request_token`]
    /// * `query` - Search query, field filters such as `artist:"Adele"` allowed
    /// * `limit` - Maximum number of results (clamped to 1..=50)
    ///
    /// # Errors
    /// - `SpotifyError::InvalidInput` - If the query is empty
    /// - `SpotifyError::Api` - If Spotify returns an error status
    /// - `SpotifyError::Parse` - If the body is not a search result
    /// - `SpotifyError::Http` - If the HTTP request fails
    #[instrument(skip(self, token))]
    pub async fn search_tracks(
        &self,
        token: &AccessToken,
        query: &str,
        limit: u32,
    ) -> SpotifyResult<Vec<Track>> {
        let query = Self::validate_query(query)?;
        let limit_str = limit.clamp(1, MAX_SEARCH_LIMIT).to_string();

        let response = self
            .http_client
            .get(self.config.search_url())
            .bearer_auth(&token.access_token)
            .query(&[("q", query), ("type", "track"), ("limit", limit_str.as_str())])
            .send()
            .await
            .map_err(Self::map_send_error)?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        let text = response.text().await?;
        let search: SearchResponse = serde_json::from_str(&text)?;

        debug!(
            query = %query,
            result_count = search.tracks.items.len(),
            "Spotify search completed"
        );

        Ok(search.tracks.items)
    }
}
