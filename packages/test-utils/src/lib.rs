//! Shared test utilities for Moodwave workspace
//!
//! This crate provides mock implementations of the upstream services so the
//! playlist pipeline can be tested without network access.
//!
//! # Mock Services
//!
//! - [`MockOpenRouterServer`] - Mock OpenRouter chat completion endpoint
//! - [`MockSpotifyServer`] - Mock Spotify token and search endpoints
//!
//! # Example
//!
//! ```rust,ignore
//! use moodwave_test_utils::{MockOpenRouterServer, MockSpotifyServer};
//!
//! #[tokio::test]
//! async fn test_with_mocks() {
//!     let llm = MockOpenRouterServer::start().await;
//!     llm.mock_completion_success("{\"songs\": []}").await;
//!
//!     // Use llm.url() to configure your client
//! }
//! ```

mod openrouter;
mod spotify;

pub use openrouter::MockOpenRouterServer;
pub use spotify::{track_fixture, MockSpotifyServer};
