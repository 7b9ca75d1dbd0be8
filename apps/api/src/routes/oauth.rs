//! OAuth callback placeholder
//!
//! The redirect URI registered with the Spotify application points here.
//! No user authorization flow exists, so the route just sends the browser
//! back to the home page.

use axum::{response::Redirect, routing::get, Router};

/// Create the OAuth callback router
pub fn oauth_router() -> Router {
    Router::new().route("/callback", get(callback))
}

async fn callback() -> Redirect {
    Redirect::to("/")
}
