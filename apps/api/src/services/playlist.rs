//! Mood playlist pipeline: recommendations, then catalog resolution

use tracing::{info, instrument};

use crate::error::ApiResult;
use crate::models::{MoodRequest, PlaylistResult};
use crate::services::recommendation::RecommendationService;
use crate::services::resolver::CatalogResolver;

/// Builds a playlist for one mood request
#[derive(Debug, Clone)]
pub struct PlaylistService {
    recommender: RecommendationService,
    resolver: CatalogResolver,
}

impl PlaylistService {
    pub fn new(recommender: RecommendationService, resolver: CatalogResolver) -> Self {
        Self {
            recommender,
            resolver,
        }
    }

    /// Run the whole pipeline
    ///
    /// Recommendation failures abort the request; catalog failures only
    /// shorten the playlist.
    #[instrument(skip(self, request))]
    pub async fn generate(&self, request: &MoodRequest) -> ApiResult<PlaylistResult> {
        let recommendations = self.recommender.request_recommendations(request).await?;
        let playlist = self.resolver.resolve(&recommendations.songs).await;

        info!(
            recommended = recommendations.songs.len(),
            resolved = playlist.len(),
            "Mood playlist generated"
        );

        Ok(PlaylistResult::new(
            recommendations.playlist_name,
            recommendations.mood_analysis,
            playlist,
        ))
    }
}
