//! Request and response models for Moodwave
//!
//! - Mood requests and model recommendations
//! - Resolved catalog tracks and playlist responses

pub mod mood;
pub mod playlist;

pub use mood::{MoodRequest, Recommendations, SongRecommendation};
pub use playlist::{PlaylistResult, ResolvedPlaylist, ResolvedTrack, EMBED_URL_PREFIX};
