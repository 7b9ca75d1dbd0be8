//! OpenRouter API client for Moodwave mood analysis
//!
//! This crate sends single-turn chat completions to the OpenRouter
//! `/chat/completions` endpoint and returns the text of the first choice.
//!
//! # Thread Safety
//!
//! `OpenRouterClient` is `Clone + Send + Sync` and can be safely shared
//! across request handlers. It uses a shared HTTP client connection pool.
//!
//! # Example
//!
//! ```no_run
//! use moodwave_openrouter_client::OpenRouterClient;
//! use moodwave_shared_config::OpenRouterConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = OpenRouterConfig::default().with_api_key("sk-or-...");
//! let client = OpenRouterClient::new(&config)?;
//!
//! let text = client.complete("Recommend three calm songs as JSON").await?;
//! println!("{}", text);
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod models;

pub use client::OpenRouterClient;
pub use error::{OpenRouterError, OpenRouterResult};
pub use models::{
    ChatChoice, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ChatRole,
};
