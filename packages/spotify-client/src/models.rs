//! Spotify Web API response models

use std::collections::HashMap;

use serde::Deserialize;

/// A track object as returned by `/search`
#[derive(Debug, Clone, Deserialize)]
pub struct Track {
    /// Spotify track ID
    pub id: String,
    /// Track title
    pub name: String,
    /// Credited artists, primary artist first
    #[serde(default)]
    pub artists: Vec<ArtistRef>,
    /// Album the track appears on
    pub album: Album,
    /// 30 second preview MP3, often absent
    #[serde(default)]
    pub preview_url: Option<String>,
    /// Known external URLs keyed by service (`spotify`)
    #[serde(default)]
    pub external_urls: HashMap<String, String>,
    /// Spotify URI (`spotify:track:<id>`)
    pub uri: String,
}

impl Track {
    /// Name of the first credited artist
    pub fn primary_artist(&self) -> Option<&str> {
        self.artists.first().map(|a| a.name.as_str())
    }

    /// Open-in-Spotify URL
    pub fn spotify_url(&self) -> Option<&str> {
        self.external_urls.get("spotify").map(String::as_str)
    }
}

/// Simplified artist object
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistRef {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
}

/// Simplified album object
#[derive(Debug, Clone, Deserialize)]
pub struct Album {
    pub name: String,
    /// Cover art, widest first
    #[serde(default)]
    pub images: Vec<Image>,
}

impl Album {
    /// URL of the first (largest) cover image
    pub fn cover_url(&self) -> Option<&str> {
        self.images.first().map(|i| i.url.as_str())
    }
}

/// Image object
#[derive(Debug, Clone, Deserialize)]
pub struct Image {
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// Access token granted by the client-credentials flow
#[derive(Clone, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("access_token", &"[REDACTED]")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

// Internal response types for deserialization

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub tracks: TrackPage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TrackPage {
    #[serde(default)]
    pub items: Vec<Track>,
}

/// Web API error body: `{"error": {"status": 400, "message": "..."}}`
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: String,
}

/// Accounts service error body: `{"error": "invalid_client", "error_description": "..."}`
#[derive(Debug, Deserialize)]
pub(crate) struct AuthErrorResponse {
    pub error: String,
    #[serde(default)]
    pub error_description: Option<String>,
}
