//! HTTP route handlers for the Moodwave API
//!
//! - Mood analysis endpoint
//! - OAuth callback placeholder
//! - Health check endpoints

pub mod health;
pub mod mood;
pub mod oauth;

pub use health::{health_router, HealthState};
pub use mood::{mood_router, MoodState};
pub use oauth::oauth_router;

use axum::{routing::get, Router};
use moodwave_openrouter_client::OpenRouterClient;
use moodwave_shared_config::CommonConfig;
use moodwave_spotify_client::SpotifyClient;

use crate::services::{CatalogResolver, PlaylistService, RecommendationService};

/// Build every route with its state from configuration
///
/// Layers (CORS, tracing) are left to the caller.
pub fn build_router(config: &CommonConfig) -> anyhow::Result<Router> {
    let openrouter = OpenRouterClient::new(&config.openrouter)?;
    let spotify = SpotifyClient::new(&config.spotify)?;

    let playlist_service = PlaylistService::new(
        RecommendationService::new(openrouter),
        CatalogResolver::new(spotify),
    );

    Ok(Router::new()
        .route("/", get(root))
        .merge(mood_router(MoodState::new(playlist_service)))
        .merge(oauth_router())
        .merge(health_router(HealthState::new(config.has_spotify()))))
}

async fn root() -> &'static str {
    "Welcome to Moodwave - mood-based playlists"
}
