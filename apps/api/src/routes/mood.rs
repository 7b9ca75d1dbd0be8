//! Mood analysis route
//!
//! - `POST /analyze_mood` - build a playlist from a mood description

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};

use crate::error::ApiResult;
use crate::models::{MoodRequest, PlaylistResult};
use crate::services::PlaylistService;

/// Shared state for the mood route
#[derive(Clone)]
pub struct MoodState {
    pub playlist_service: Arc<PlaylistService>,
}

impl MoodState {
    pub fn new(playlist_service: PlaylistService) -> Self {
        Self {
            playlist_service: Arc::new(playlist_service),
        }
    }
}

/// Create the mood analysis router
pub fn mood_router(state: MoodState) -> Router {
    Router::new()
        .route("/analyze_mood", post(analyze_mood))
        .with_state(state)
}

/// Turn a mood description into a playlist
///
/// # Response
/// - 200 OK with `{success, playlist_name, mood_analysis, tracks, embed_urls, total_tracks}`
/// - 500 with `{error}` when the LLM call fails, its answer cannot be parsed,
///   or the body is not a JSON object
async fn analyze_mood(
    State(state): State<MoodState>,
    payload: Result<Json<MoodRequest>, JsonRejection>,
) -> ApiResult<Json<PlaylistResult>> {
    let Json(request) = payload?;
    let result = state.playlist_service.generate(&request).await?;
    Ok(Json(result))
}
