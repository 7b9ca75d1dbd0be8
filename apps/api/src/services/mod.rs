//! Business logic services for Moodwave
//!
//! - `recommendation`: mood description → song list via the LLM
//! - `resolver`: song list → verified Spotify tracks
//! - `playlist`: the two stages wired together

pub mod playlist;
pub mod recommendation;
pub mod resolver;

pub use playlist::PlaylistService;
pub use recommendation::{RecommendationError, RecommendationService};
pub use resolver::{CatalogResolver, ResolveError};
