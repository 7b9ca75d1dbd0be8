//! Common test utilities for API integration tests
//!
//! Builds the full router against mock OpenRouter and Spotify servers and
//! provides request helpers.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use moodwave_api::build_router;
use moodwave_shared_config::{CommonConfig, Environment, OpenRouterConfig, SpotifyConfig};
use moodwave_test_utils::{MockOpenRouterServer, MockSpotifyServer};
use serde_json::Value;
use tower::ServiceExt;

/// Router wired to fresh mock upstreams
pub struct TestApp {
    pub router: Router,
    pub llm: MockOpenRouterServer,
    pub spotify: MockSpotifyServer,
}

impl TestApp {
    /// Start mocks and build the app with Spotify credentials configured
    pub async fn start() -> Self {
        Self::build(true).await
    }

    /// Start mocks and build the app without Spotify credentials
    pub async fn without_spotify() -> Self {
        Self::build(false).await
    }

    async fn build(spotify_configured: bool) -> Self {
        let llm = MockOpenRouterServer::start().await;
        let spotify = MockSpotifyServer::start().await;

        let mut spotify_config = SpotifyConfig::with_base_url(spotify.url());
        if spotify_configured {
            spotify_config = spotify_config.with_credentials("test-client-id", "test-secret");
        }

        let config = CommonConfig {
            openrouter: OpenRouterConfig::with_url(llm.url()).with_api_key("test-key"),
            spotify: spotify_config,
            environment: Environment::Development,
            log_level: "debug".to_string(),
        };

        let router = build_router(&config).expect("router should build");

        Self {
            router,
            llm,
            spotify,
        }
    }

    /// POST a JSON body to `/analyze_mood`
    pub async fn analyze_mood(&self, body: Value) -> (StatusCode, Value) {
        self.post_raw("/analyze_mood", Some("application/json"), body.to_string())
            .await
    }

    /// POST an arbitrary body, returning the status and the body as JSON
    pub async fn post_raw(
        &self,
        uri: &str,
        content_type: Option<&str>,
        body: String,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method("POST").uri(uri);
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }

        let response = self
            .router
            .clone()
            .oneshot(builder.body(Body::from(body)).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    /// GET a path, returning the raw response
    pub async fn get(&self, uri: &str) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }
}

/// Read a response body as a string
pub async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Assert the `/analyze_mood` success invariants on a response body
pub fn assert_playlist_invariants(body: &Value) {
    let tracks = body["tracks"].as_array().expect("tracks array");
    let embed_urls = body["embed_urls"].as_array().expect("embed_urls array");

    assert_eq!(body["success"], true);
    assert_eq!(body["total_tracks"].as_u64(), Some(tracks.len() as u64));
    assert_eq!(tracks.len(), embed_urls.len());
    assert!(tracks.len() <= 10);

    for (track, embed_url) in tracks.iter().zip(embed_urls) {
        let id = track["id"].as_str().expect("track id");
        assert_eq!(
            embed_url.as_str(),
            Some(format!("https://open.spotify.com/embed/track/{}", id).as_str())
        );
    }
}
