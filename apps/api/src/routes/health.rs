//! Health check HTTP route handlers
//!
//! - `GET /health` - status plus whether catalog credentials are configured
//! - `GET /health/live` - Kubernetes-style liveness probe

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

/// Shared state for health check handlers
#[derive(Clone, Copy)]
pub struct HealthState {
    /// Whether a Spotify client ID is configured
    pub spotify_configured: bool,
}

impl HealthState {
    pub fn new(spotify_configured: bool) -> Self {
        Self { spotify_configured }
    }
}

/// Body of `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub spotify_configured: bool,
}

/// Create health check router
pub fn health_router(state: HealthState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/live", get(liveness_probe))
        .with_state(state)
}

/// Health check
///
/// Always healthy while the process serves requests; missing catalog
/// credentials are reported, not treated as a failure.
async fn health_check(State(state): State<HealthState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        spotify_configured: state.spotify_configured,
    })
}

/// Liveness probe for Kubernetes
///
/// # Response
/// - 200 OK with JSON body containing status
async fn liveness_probe() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
