//! Mock Spotify server for testing catalog resolution
//!
//! Serves both the accounts token endpoint and the Web API search endpoint
//! from one [`wiremock::MockServer`], matching the layout produced by
//! `SpotifyConfig::with_base_url`.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN_PATH: &str = "/api/token";
const SEARCH_PATH: &str = "/v1/search";

/// Build a Spotify track object as returned by `/search`
pub fn track_fixture(id: &str, name: &str, artist: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "artists": [{"id": format!("artist-{}", id), "name": artist}],
        "album": {
            "name": format!("{} (Album)", name),
            "images": [{"url": format!("https://i.scdn.co/image/{}", id), "width": 640, "height": 640}]
        },
        "preview_url": format!("https://p.scdn.co/mp3-preview/{}", id),
        "external_urls": {"spotify": format!("https://open.spotify.com/track/{}", id)},
        "uri": format!("spotify:track:{}", id)
    })
}

/// Mock Spotify server
pub struct MockSpotifyServer {
    server: MockServer,
}

impl MockSpotifyServer {
    /// Start a new mock Spotify server
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL to pass to `SpotifyConfig::with_base_url`
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Mount a successful client-credentials token response
    pub async fn mock_token_success(&self) {
        Mock::given(method("POST"))
            .and(path(TOKEN_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "mock-access-token",
                "token_type": "Bearer",
                "expires_in": 3600
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a rejected token request
    pub async fn mock_token_failure(&self) {
        Mock::given(method("POST"))
            .and(path(TOKEN_PATH))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": "invalid_client",
                "error_description": "Invalid client"
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a search response for an exact `q` value and result limit
    pub async fn mock_search(&self, query: &str, limit: u32, items: Vec<serde_json::Value>) {
        Mock::given(method("GET"))
            .and(path(SEARCH_PATH))
            .and(query_param("q", query))
            .and(query_param("limit", limit.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "tracks": {"href": "", "items": items, "limit": limit, "total": items.len()}
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount a search failure for an exact `q` value
    pub async fn mock_search_failure(&self, query: &str, status_code: u16) {
        Mock::given(method("GET"))
            .and(path(SEARCH_PATH))
            .and(query_param("q", query))
            .respond_with(ResponseTemplate::new(status_code).set_body_json(json!({
                "error": {"status": status_code, "message": "mock search failure"}
            })))
            .mount(&self.server)
            .await;
    }

    /// Mount an empty result for any search not matched by an earlier mock
    pub async fn mock_search_fallthrough_empty(&self) {
        Mock::given(method("GET"))
            .and(path(SEARCH_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "tracks": {"items": []}
            })))
            .with_priority(10)
            .mount(&self.server)
            .await;
    }

    /// `q` values of every search request received so far, in order
    pub async fn search_queries(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| r.url.path() == SEARCH_PATH)
            .filter_map(|r| {
                r.url
                    .query_pairs()
                    .find(|(k, _)| k == "q")
                    .map(|(_, v)| v.into_owned())
            })
            .collect()
    }

    /// Number of search requests received so far
    pub async fn search_calls(&self) -> usize {
        self.search_queries().await.len()
    }

    /// Number of token requests received so far
    pub async fn token_calls(&self) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| r.url.path() == TOKEN_PATH)
            .count()
    }

    /// Get reference to the underlying mock server for custom mock setups
    pub fn inner(&self) -> &MockServer {
        &self.server
    }
}
