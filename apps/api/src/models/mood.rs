//! Mood request and recommendation models
//!
//! These types only live for the duration of one `/analyze_mood` request.

use serde::{Deserialize, Serialize};

/// Name used when the listener did not give one
pub const DEFAULT_LISTENER_NAME: &str = "Friend";

/// Language used when the listener did not state a preference
pub const DEFAULT_LANGUAGE: &str = "English";

/// Mood and taste description submitted by the listener
///
/// Every field is optional free text; `null` counts as absent. Nothing is
/// validated beyond presence.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MoodRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub feelings: Option<String>,
    #[serde(default)]
    pub time_of_day: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub genres: Option<String>,
    #[serde(default)]
    pub artists: Option<String>,
}

impl MoodRequest {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_LISTENER_NAME)
    }

    pub fn mood(&self) -> &str {
        self.mood.as_deref().unwrap_or_default()
    }

    pub fn feelings(&self) -> &str {
        self.feelings.as_deref().unwrap_or_default()
    }

    pub fn time_of_day(&self) -> &str {
        self.time_of_day.as_deref().unwrap_or_default()
    }

    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }

    pub fn genres(&self) -> &str {
        self.genres.as_deref().unwrap_or_default()
    }

    pub fn artists(&self) -> &str {
        self.artists.as_deref().unwrap_or_default()
    }
}

/// One (artist, track) pair suggested by the model
///
/// Unvalidated: either field may be empty when the model left it out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SongRecommendation {
    pub artist: String,
    pub track: String,
}

impl SongRecommendation {
    pub fn new(artist: impl Into<String>, track: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            track: track.into(),
        }
    }

    /// Read a recommendation out of an arbitrary JSON value
    ///
    /// Non-object values yield `None`; missing or non-string fields become
    /// empty strings so the resolver can skip them.
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        let object = value.as_object()?;
        let field = |key: &str| {
            object
                .get(key)
                .and_then(serde_json::Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Some(Self {
            artist: field("artist"),
            track: field("track"),
        })
    }

    /// Whether both artist and track are present
    pub fn is_complete(&self) -> bool {
        !self.artist.is_empty() && !self.track.is_empty()
    }
}

/// Parsed model output: playlist title, songs and a short mood reading
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendations {
    pub playlist_name: String,
    pub mood_analysis: String,
    pub songs: Vec<SongRecommendation>,
}
