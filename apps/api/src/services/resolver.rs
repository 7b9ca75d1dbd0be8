//! Recommendation → catalog track resolution
//!
//! Each song gets an exact field search whose top hit must pass a match
//! heuristic; otherwise a broad text search is tried and its top hit is
//! taken as is. Songs are resolved one after another, and a failure on one
//! song never affects the others.

use moodwave_spotify_client::{AccessToken, SpotifyClient, SpotifyError, Track};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::models::{ResolvedPlaylist, ResolvedTrack, SongRecommendation};

/// Maximum number of tracks in a playlist
pub const MAX_PLAYLIST_TRACKS: usize = 10;

/// Results fetched by the exact search (only the first is examined)
const EXACT_SEARCH_LIMIT: u32 = 3;

/// Results fetched by the broad fallback search
const BROAD_SEARCH_LIMIT: u32 = 1;

/// Title fragments that mark a track as a variant of the requested song
const VARIANT_MARKERS: [&str; 3] = ["remix", "cover", "version"];

/// Errors that abort resolution of a single song
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Token or search request failed
    #[error(transparent)]
    Catalog(#[from] SpotifyError),

    /// Search result lacks a field every resolved track needs
    #[error("catalog track {id} has no {missing}")]
    MalformedTrack { id: String, missing: &'static str },
}

/// Result type for single-song resolution
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Exact field query for a recommendation
pub fn exact_query(song: &SongRecommendation) -> String {
    format!("artist:\"{}\" track:\"{}\"", song.artist, song.track)
}

/// Unstructured fallback query for a recommendation
pub fn broad_query(song: &SongRecommendation) -> String {
    format!("{} {}", song.artist, song.track)
}

/// Whether an exact-search hit is the requested recording
///
/// Artist names must contain one another (case-insensitive) and the title
/// must not look like a remix, cover or alternate version.
pub fn is_acceptable_match(
    candidate_artist: &str,
    candidate_title: &str,
    requested_artist: &str,
) -> bool {
    let candidate_artist = candidate_artist.to_lowercase();
    let requested_artist = requested_artist.to_lowercase();
    let title = candidate_title.to_lowercase();

    let same_artist = candidate_artist.contains(&requested_artist)
        || requested_artist.contains(&candidate_artist);
    let is_variant = VARIANT_MARKERS.iter().any(|marker| title.contains(marker));

    same_artist && !is_variant
}

impl TryFrom<Track> for ResolvedTrack {
    type Error = ResolveError;

    fn try_from(track: Track) -> Result<Self, Self::Error> {
        let artist = track
            .primary_artist()
            .ok_or_else(|| ResolveError::MalformedTrack {
                id: track.id.clone(),
                missing: "artist",
            })?
            .to_string();
        let external_url = track
            .spotify_url()
            .ok_or_else(|| ResolveError::MalformedTrack {
                id: track.id.clone(),
                missing: "Spotify URL",
            })?
            .to_string();
        let image = track.album.cover_url().map(str::to_string);

        Ok(Self {
            id: track.id,
            name: track.name,
            artist,
            album: track.album.name,
            preview_url: track.preview_url,
            external_url,
            image,
            uri: track.uri,
        })
    }
}

/// Resolves recommendations against the Spotify catalog
#[derive(Debug, Clone)]
pub struct CatalogResolver {
    client: SpotifyClient,
}

impl CatalogResolver {
    pub fn new(client: SpotifyClient) -> Self {
        Self { client }
    }

    /// Resolve recommendations in order, keeping at most
    /// [`MAX_PLAYLIST_TRACKS`] matches
    ///
    /// Never fails: songs that cannot be matched or whose lookups error are
    /// logged and left out.
    #[instrument(skip(self, songs), fields(song_count = songs.len()))]
    pub async fn resolve(&self, songs: &[SongRecommendation]) -> ResolvedPlaylist {
        let mut session = CatalogSession::new(&self.client);
        let mut tracks = Vec::new();

        for song in songs {
            if !song.is_complete() {
                debug!(artist = %song.artist, track = %song.track, "Skipping incomplete recommendation");
                continue;
            }

            match session.resolve_song(song).await {
                Ok(Some(track)) => tracks.push(track),
                Ok(None) => {
                    info!(artist = %song.artist, track = %song.track, "No catalog match, dropping song");
                }
                Err(e) => {
                    warn!(
                        artist = %song.artist,
                        track = %song.track,
                        error = %e,
                        "Error searching catalog, skipping song"
                    );
                }
            }
        }

        tracks.truncate(MAX_PLAYLIST_TRACKS);
        debug!(resolved = tracks.len(), "Catalog resolution finished");

        ResolvedPlaylist::new(tracks)
    }
}

/// Per-request lookup state: the access token is fetched on first use and
/// reused for the remaining songs of the same request
struct CatalogSession<'a> {
    client: &'a SpotifyClient,
    token: Option<AccessToken>,
}

impl<'a> CatalogSession<'a> {
    fn new(client: &'a SpotifyClient) -> Self {
        Self {
            client,
            token: None,
        }
    }

    async fn token(&mut self) -> ResolveResult<&AccessToken> {
        let token = match self.token.take() {
            Some(token) => token,
            None => self.client.request_token().await?,
        };
        let token: &AccessToken = self.token.insert(token);
        Ok(token)
    }

    async fn search(&mut self, query: &str, limit: u32) -> ResolveResult<Vec<Track>> {
        let client = self.client;
        let token = self.token().await?;
        Ok(client.search_tracks(token, query, limit).await?)
    }

    async fn resolve_song(
        &mut self,
        song: &SongRecommendation,
    ) -> ResolveResult<Option<ResolvedTrack>> {
        let exact_hits = self.search(&exact_query(song), EXACT_SEARCH_LIMIT).await?;

        // Only the top hit is considered; lower-ranked hits are ignored
        if let Some(candidate) = exact_hits.into_iter().next() {
            let candidate_artist = candidate.primary_artist().ok_or_else(|| {
                ResolveError::MalformedTrack {
                    id: candidate.id.clone(),
                    missing: "artist",
                }
            })?;

            if is_acceptable_match(candidate_artist, &candidate.name, &song.artist) {
                return ResolvedTrack::try_from(candidate).map(Some);
            }

            debug!(
                artist = %song.artist,
                track = %song.track,
                candidate_artist = %candidate_artist,
                candidate_title = %candidate.name,
                "Exact match rejected, trying broad search"
            );
        }

        let broad_hits = self.search(&broad_query(song), BROAD_SEARCH_LIMIT).await?;
        broad_hits
            .into_iter()
            .next()
            .map(ResolvedTrack::try_from)
            .transpose()
    }
}
