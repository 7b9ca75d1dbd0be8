//! Mood → song recommendations via the LLM
//!
//! The model answers in free text that usually wraps one JSON object in
//! prose. Extraction takes everything from the first `{` to the last `}`
//! and parses it. This is best effort: stray braces in the surrounding prose
//! produce an invalid slice, which is reported as a parse error rather than
//! repaired.

use moodwave_openrouter_client::{OpenRouterClient, OpenRouterError};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::{MoodRequest, Recommendations, SongRecommendation};

/// Number of songs requested from the model
pub const REQUESTED_SONG_COUNT: usize = 10;

/// Mood analysis used when the model omits one
pub const DEFAULT_MOOD_ANALYSIS: &str = "Enjoy your personalized playlist!";

/// Errors from the recommendation stage
#[derive(Error, Debug)]
pub enum RecommendationError {
    /// The LLM answered with a non-success status
    #[error("LLM request was rejected: {0}")]
    Upstream(#[source] OpenRouterError),

    /// The answer held no extractable or valid JSON object
    #[error("could not parse recommendations: {0}")]
    Parse(String),

    /// Transport failure or malformed completion envelope
    #[error("LLM request failed: {0}")]
    Unhandled(#[source] OpenRouterError),
}

impl From<OpenRouterError> for RecommendationError {
    fn from(err: OpenRouterError) -> Self {
        if err.is_status_error() {
            Self::Upstream(err)
        } else {
            Self::Unhandled(err)
        }
    }
}

/// Result type for the recommendation stage
pub type RecommendationResult<T> = Result<T, RecommendationError>;

/// Asks the LLM for songs matching a listener's mood
#[derive(Debug, Clone)]
pub struct RecommendationService {
    client: OpenRouterClient,
}

impl RecommendationService {
    pub fn new(client: OpenRouterClient) -> Self {
        Self { client }
    }

    /// Request recommendations for one mood description
    ///
    /// # Errors
    /// - `RecommendationError::Upstream` - non-success status from the LLM
    /// - `RecommendationError::Parse` - no valid JSON object in the answer
    /// - `RecommendationError::Unhandled` - transport or envelope failure
    #[instrument(skip(self, request), fields(listener = %request.name()))]
    pub async fn request_recommendations(
        &self,
        request: &MoodRequest,
    ) -> RecommendationResult<Recommendations> {
        let prompt = build_prompt(request);
        let content = self.client.complete(&prompt).await?;

        let recommendations = parse_recommendations(&content, request.name())?;

        debug!(
            playlist_name = %recommendations.playlist_name,
            song_count = recommendations.songs.len(),
            "Parsed LLM recommendations"
        );

        Ok(recommendations)
    }
}

/// Build the single user message sent to the model
///
/// Fields are embedded verbatim; the prompt is plain text.
pub fn build_prompt(request: &MoodRequest) -> String {
    let name = request.name();
    format!(
        r#"Analyze this person's mood and music taste and recommend {count} high-quality songs.

Name: {name}
Current Mood: {mood}
Feelings: {feelings}
Time of Day: {time_of_day}
Preferred Language: {language}
Favorite Genres: {genres}
Favorite Artists: {artists}

Recommend exactly {count} songs that fit this mood and these preferences.
Only pick well-known tracks by the official artists (no remixes or covers).

Answer with JSON in exactly this shape:
{{
    "playlist_name": "A creative playlist name for {name}",
    "songs": [
        {{"artist": "Artist Name", "track": "Song Title"}},
        {{"artist": "Artist Name", "track": "Song Title"}}
    ],
    "mood_analysis": "A short reading of their mood and why these songs fit"
}}"#,
        count = REQUESTED_SONG_COUNT,
        name = name,
        mood = request.mood(),
        feelings = request.feelings(),
        time_of_day = request.time_of_day(),
        language = request.language(),
        genres = request.genres(),
        artists = request.artists(),
    )
}

/// Slice from the first `{` to the last `}`, inclusive
///
/// Returns `None` when either brace is missing or the last `}` comes before
/// the first `{`.
pub fn extract_json_block(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Parse the model's answer into recommendations
///
/// Missing or mistyped `playlist_name`, `mood_analysis` and `songs` fall back
/// to defaults; song entries that are not objects are dropped.
pub fn parse_recommendations(
    content: &str,
    listener_name: &str,
) -> RecommendationResult<Recommendations> {
    let json = extract_json_block(content).ok_or_else(|| {
        warn!(response_len = content.len(), "LLM answer contains no JSON object");
        RecommendationError::Parse("no JSON object in model answer".to_string())
    })?;

    let value: Value = serde_json::from_str(json).map_err(|e| {
        warn!(error = %e, "LLM answer JSON is invalid");
        RecommendationError::Parse(e.to_string())
    })?;

    let text_field = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);

    let songs: Vec<SongRecommendation> = value
        .get("songs")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(SongRecommendation::from_value)
                .collect()
        })
        .unwrap_or_default();

    Ok(Recommendations {
        playlist_name: text_field("playlist_name")
            .unwrap_or_else(|| format!("{}'s Mood Playlist", listener_name)),
        mood_analysis: text_field("mood_analysis")
            .unwrap_or_else(|| DEFAULT_MOOD_ANALYSIS.to_string()),
        songs,
    })
}
