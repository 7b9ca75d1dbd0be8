//! Spotify Web API client for Moodwave
//!
//! This crate provides the small slice of the Spotify Web API the playlist
//! pipeline needs:
//! - App access tokens via the client-credentials flow
//! - Track search
//!
//! # Example
//!
//! ```rust,no_run
//! use moodwave_shared_config::SpotifyConfig;
//! use moodwave_spotify_client::SpotifyClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SpotifyConfig::default().with_credentials("client-id", "client-secret");
//! let client = SpotifyClient::new(&config)?;
//!
//! let token = client.request_token().await?;
//! let tracks = client
//!     .search_tracks(&token, "artist:\"Radiohead\" track:\"Creep\"", 3)
//!     .await?;
//! for track in tracks {
//!     println!("{} - {:?}", track.name, track.primary_artist());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Environment Variables
//!
//! - `SPOTIFY_CLIENT_ID`, `SPOTIFY_CLIENT_SECRET`: application credentials

mod client;
mod error;
mod models;

pub use client::SpotifyClient;
pub use error::{SpotifyError, SpotifyResult};
pub use models::{AccessToken, Album, ArtistRef, Image, Track};
