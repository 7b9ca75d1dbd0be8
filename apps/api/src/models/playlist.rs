//! Playlist response models
//!
//! Derived per request from catalog search results; never persisted.

use serde::Serialize;

/// Prefix of the embeddable Spotify player URL for a track
pub const EMBED_URL_PREFIX: &str = "https://open.spotify.com/embed/track/";

/// A recommendation that was matched to a catalog track
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTrack {
    pub id: String,
    pub name: String,
    /// First credited artist
    pub artist: String,
    pub album: String,
    pub preview_url: Option<String>,
    pub external_url: String,
    /// First album cover image
    pub image: Option<String>,
    pub uri: String,
}

impl ResolvedTrack {
    /// Embeddable player URL for this track
    pub fn embed_url(&self) -> String {
        format!("{}{}", EMBED_URL_PREFIX, self.id)
    }
}

/// Ordered resolved tracks with their index-aligned embed URLs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedPlaylist {
    tracks: Vec<ResolvedTrack>,
    embed_urls: Vec<String>,
}

impl ResolvedPlaylist {
    pub fn new(tracks: Vec<ResolvedTrack>) -> Self {
        let embed_urls = tracks.iter().map(ResolvedTrack::embed_url).collect();
        Self { tracks, embed_urls }
    }

    pub fn tracks(&self) -> &[ResolvedTrack] {
        &self.tracks
    }

    pub fn embed_urls(&self) -> &[String] {
        &self.embed_urls
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

/// Body of a successful `/analyze_mood` response
#[derive(Debug, Clone, Serialize)]
pub struct PlaylistResult {
    pub success: bool,
    pub playlist_name: String,
    pub mood_analysis: String,
    pub tracks: Vec<ResolvedTrack>,
    pub embed_urls: Vec<String>,
    pub total_tracks: usize,
}

impl PlaylistResult {
    pub fn new(playlist_name: String, mood_analysis: String, playlist: ResolvedPlaylist) -> Self {
        let ResolvedPlaylist { tracks, embed_urls } = playlist;
        Self {
            success: true,
            playlist_name,
            mood_analysis,
            total_tracks: tracks.len(),
            tracks,
            embed_urls,
        }
    }
}
