//! Integration tests for `POST /analyze_mood`
//!
//! Runs the full router against mock OpenRouter and Spotify servers.

mod common;

use axum::http::StatusCode;
use common::{assert_playlist_invariants, TestApp};
use moodwave_test_utils::track_fixture;
use serde_json::{json, Value};

fn mood_request() -> Value {
    json!({
        "name": "Sam",
        "mood": "happy",
        "feelings": "energetic",
        "time_of_day": "morning",
        "language": "English",
        "genres": "pop",
        "artists": "Adele"
    })
}

fn exact(artist: &str, track: &str) -> String {
    format!("artist:\"{}\" track:\"{}\"", artist, track)
}

#[tokio::test]
async fn test_llm_failure_returns_ai_analysis_error() {
    let app = TestApp::start().await;
    app.llm.mock_completion_failure(500, "upstream exploded").await;

    let (status, body) = app.analyze_mood(mood_request()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "AI analysis failed"}));
    assert_eq!(app.spotify.token_calls().await, 0);
    assert_eq!(app.spotify.search_calls().await, 0);
}

#[tokio::test]
async fn test_llm_unauthorized_returns_ai_analysis_error() {
    let app = TestApp::start().await;
    app.llm.mock_completion_failure(401, "No auth credentials found").await;

    let (status, body) = app.analyze_mood(mood_request()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "AI analysis failed");
}

#[tokio::test]
async fn test_answer_without_braces_returns_parse_error() {
    let app = TestApp::start().await;
    app.llm
        .mock_completion_success("Sorry, I cannot recommend anything today.")
        .await;

    let (status, body) = app.analyze_mood(mood_request()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to parse AI recommendations"}));
    assert_eq!(app.spotify.search_calls().await, 0);
}

#[tokio::test]
async fn test_invalid_json_slice_returns_parse_error() {
    let app = TestApp::start().await;
    app.llm
        .mock_completion_success("Try {these songs} and {those")
        .await;

    let (status, body) = app.analyze_mood(mood_request()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to parse AI recommendations");
}

#[tokio::test]
async fn test_empty_song_list_returns_empty_playlist() {
    let app = TestApp::start().await;
    app.llm
        .mock_recommendations(json!({
            "playlist_name": "Quiet Morning",
            "songs": [],
            "mood_analysis": "Calm and collected"
        }))
        .await;

    let (status, body) = app.analyze_mood(mood_request()).await;

    assert_eq!(status, StatusCode::OK);
    assert_playlist_invariants(&body);
    assert_eq!(body["playlist_name"], "Quiet Morning");
    assert_eq!(body["mood_analysis"], "Calm and collected");
    assert_eq!(body["total_tracks"], 0);
    assert_eq!(app.spotify.token_calls().await, 0);
}

#[tokio::test]
async fn test_exact_match_is_accepted() {
    let app = TestApp::start().await;
    app.llm
        .mock_recommendations(json!({
            "playlist_name": "Sam's Sunshine",
            "songs": [{"artist": "Adele", "track": "Hello"}],
            "mood_analysis": "Bright"
        }))
        .await;
    app.spotify.mock_token_success().await;
    app.spotify
        .mock_search(
            &exact("Adele", "Hello"),
            3,
            vec![track_fixture("4sPmO7WMQUAf45kwMOtONw", "Hello", "Adele")],
        )
        .await;

    let (status, body) = app.analyze_mood(mood_request()).await;

    assert_eq!(status, StatusCode::OK);
    assert_playlist_invariants(&body);
    assert_eq!(body["success"], true);
    assert_eq!(body["total_tracks"], 1);
    assert_eq!(
        body["tracks"][0],
        json!({
            "id": "4sPmO7WMQUAf45kwMOtONw",
            "name": "Hello",
            "artist": "Adele",
            "album": "Hello (Album)",
            "preview_url": "https://p.scdn.co/mp3-preview/4sPmO7WMQUAf45kwMOtONw",
            "external_url": "https://open.spotify.com/track/4sPmO7WMQUAf45kwMOtONw",
            "image": "https://i.scdn.co/image/4sPmO7WMQUAf45kwMOtONw",
            "uri": "spotify:track:4sPmO7WMQUAf45kwMOtONw"
        })
    );
    assert_eq!(
        body["embed_urls"][0],
        "https://open.spotify.com/embed/track/4sPmO7WMQUAf45kwMOtONw"
    );
    assert_eq!(app.spotify.search_calls().await, 1);
}

#[tokio::test]
async fn test_remix_hit_falls_back_to_broad_search() {
    let app = TestApp::start().await;
    app.llm
        .mock_recommendations(json!({
            "playlist_name": "Sam's Sunshine",
            "songs": [{"artist": "Adele", "track": "Hello"}],
            "mood_analysis": "Bright"
        }))
        .await;
    app.spotify.mock_token_success().await;
    app.spotify
        .mock_search(
            &exact("Adele", "Hello"),
            3,
            vec![track_fixture("remix", "Hello - Remix", "Adele")],
        )
        .await;
    app.spotify
        .mock_search(
            "Adele Hello",
            1,
            vec![track_fixture("original", "Hello", "Adele")],
        )
        .await;

    let (status, body) = app.analyze_mood(mood_request()).await;

    assert_eq!(status, StatusCode::OK);
    assert_playlist_invariants(&body);
    assert_eq!(body["total_tracks"], 1);
    assert_eq!(body["tracks"][0]["id"], "original");
    assert_eq!(
        app.spotify.search_queries().await,
        vec![exact("Adele", "Hello"), "Adele Hello".to_string()]
    );
}

#[tokio::test]
async fn test_empty_exact_search_uses_broad_hit() {
    let app = TestApp::start().await;
    app.llm
        .mock_recommendations(json!({
            "playlist_name": "Sam's Sunshine",
            "songs": [
                {"artist": "Adele", "track": "Hello"},
                {"artist": "Radiohead", "track": "Creep"}
            ],
            "mood_analysis": "Bright"
        }))
        .await;
    app.spotify.mock_token_success().await;
    app.spotify
        .mock_search(&exact("Adele", "Hello"), 3, vec![])
        .await;
    app.spotify
        .mock_search(
            "Adele Hello",
            1,
            vec![track_fixture("cover", "Hello - Cover Version", "Boyce Avenue")],
        )
        .await;
    app.spotify
        .mock_search(&exact("Radiohead", "Creep"), 3, vec![])
        .await;
    app.spotify
        .mock_search_failure("Radiohead Creep", 503)
        .await;

    let (status, body) = app.analyze_mood(mood_request()).await;

    assert_eq!(status, StatusCode::OK);
    assert_playlist_invariants(&body);
    assert_eq!(body["total_tracks"], 1);
    assert_eq!(body["tracks"][0]["id"], "cover");
    assert_eq!(body["tracks"][0]["artist"], "Boyce Avenue");
}

#[tokio::test]
async fn test_failing_song_is_skipped_and_order_kept() {
    let app = TestApp::start().await;
    let songs: Vec<Value> = (1..=5)
        .map(|i| json!({"artist": format!("Artist {}", i), "track": format!("Song {}", i)}))
        .collect();
    app.llm
        .mock_recommendations(json!({
            "playlist_name": "Five",
            "songs": songs,
            "mood_analysis": "Mixed"
        }))
        .await;
    app.spotify.mock_token_success().await;
    for i in [1, 2, 4, 5] {
        let artist = format!("Artist {}", i);
        let track = format!("Song {}", i);
        app.spotify
            .mock_search(
                &exact(&artist, &track),
                3,
                vec![track_fixture(&format!("t{}", i), &track, &artist)],
            )
            .await;
    }
    app.spotify
        .mock_search_failure(&exact("Artist 3", "Song 3"), 500)
        .await;

    let (status, body) = app.analyze_mood(mood_request()).await;

    assert_eq!(status, StatusCode::OK);
    assert_playlist_invariants(&body);
    let ids: Vec<&str> = body["tracks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["t1", "t2", "t4", "t5"]);
    assert_eq!(app.spotify.token_calls().await, 1);
}

#[tokio::test]
async fn test_playlist_is_capped_at_ten_tracks() {
    let app = TestApp::start().await;
    let songs: Vec<Value> = (1..=12)
        .map(|i| json!({"artist": format!("Artist {}", i), "track": format!("Song {}", i)}))
        .collect();
    app.llm
        .mock_recommendations(json!({
            "playlist_name": "Twelve",
            "songs": songs,
            "mood_analysis": "Plenty"
        }))
        .await;
    app.spotify.mock_token_success().await;
    for i in 1..=12 {
        let artist = format!("Artist {}", i);
        let track = format!("Song {}", i);
        app.spotify
            .mock_search(
                &exact(&artist, &track),
                3,
                vec![track_fixture(&format!("t{}", i), &track, &artist)],
            )
            .await;
    }

    let (status, body) = app.analyze_mood(mood_request()).await;

    assert_eq!(status, StatusCode::OK);
    assert_playlist_invariants(&body);
    assert_eq!(body["total_tracks"], 10);
    assert_eq!(body["tracks"][0]["id"], "t1");
    assert_eq!(body["tracks"][9]["id"], "t10");
}

#[tokio::test]
async fn test_unmatched_and_incomplete_songs_are_dropped() {
    let app = TestApp::start().await;
    app.llm
        .mock_recommendations(json!({
            "playlist_name": "Sparse",
            "songs": [
                {"artist": "Nobody Known", "track": "Nothing"},
                {"artist": "Adele"},
                "not an object",
                {"artist": "Adele", "track": "Hello"}
            ],
            "mood_analysis": "Thin"
        }))
        .await;
    app.spotify.mock_token_success().await;
    app.spotify
        .mock_search(
            &exact("Adele", "Hello"),
            3,
            vec![track_fixture("hello", "Hello", "Adele")],
        )
        .await;
    app.spotify.mock_search_fallthrough_empty().await;

    let (status, body) = app.analyze_mood(mood_request()).await;

    assert_eq!(status, StatusCode::OK);
    assert_playlist_invariants(&body);
    assert_eq!(body["total_tracks"], 1);
    assert_eq!(body["tracks"][0]["id"], "hello");
    assert_eq!(
        app.spotify.search_queries().await,
        vec![
            exact("Nobody Known", "Nothing"),
            "Nobody Known Nothing".to_string(),
            exact("Adele", "Hello")
        ]
    );
}

#[tokio::test]
async fn test_missing_fields_use_defaults() {
    let app = TestApp::start().await;
    app.llm
        .mock_recommendations(json!({"songs": []}))
        .await;

    let (status, body) = app.analyze_mood(json!({"name": "Sam"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["playlist_name"], "Sam's Mood Playlist");
    assert_eq!(body["mood_analysis"], "Enjoy your personalized playlist!");
}

#[tokio::test]
async fn test_empty_request_uses_default_name() {
    let app = TestApp::start().await;
    app.llm.mock_recommendations(json!({})).await;

    let (status, body) = app.analyze_mood(json!({"name": null})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["playlist_name"], "Friend's Mood Playlist");
    assert_eq!(body["total_tracks"], 0);
}

#[tokio::test]
async fn test_prompt_carries_request_fields() {
    let app = TestApp::start().await;
    app.llm.mock_recommendations(json!({"songs": []})).await;

    let (status, _) = app.analyze_mood(mood_request()).await;
    assert_eq!(status, StatusCode::OK);

    let requests = app.llm.inner().received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let sent: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(sent["model"], "mistralai/mistral-7b-instruct:free");
    assert_eq!(sent["messages"][0]["role"], "user");
    let prompt = sent["messages"][0]["content"].as_str().unwrap();
    assert!(prompt.contains("Name: Sam"));
    assert!(prompt.contains("Current Mood: happy"));
    assert!(prompt.contains("Favorite Artists: Adele"));
}

#[tokio::test]
async fn test_missing_spotify_credentials_yield_empty_playlist() {
    let app = TestApp::without_spotify().await;
    app.llm
        .mock_recommendations(json!({
            "playlist_name": "Sam's Sunshine",
            "songs": [
                {"artist": "Adele", "track": "Hello"},
                {"artist": "Adele", "track": "Skyfall"}
            ],
            "mood_analysis": "Bright"
        }))
        .await;

    let (status, body) = app.analyze_mood(mood_request()).await;

    assert_eq!(status, StatusCode::OK);
    assert_playlist_invariants(&body);
    assert_eq!(body["total_tracks"], 0);
    assert_eq!(body["playlist_name"], "Sam's Sunshine");
    assert_eq!(app.spotify.token_calls().await, 0);
    assert_eq!(app.spotify.search_calls().await, 0);
}

#[tokio::test]
async fn test_rejected_token_yields_empty_playlist() {
    let app = TestApp::start().await;
    app.llm
        .mock_recommendations(json!({
            "playlist_name": "Locked Out",
            "songs": [{"artist": "Adele", "track": "Hello"}],
            "mood_analysis": "Bright"
        }))
        .await;
    app.spotify.mock_token_failure().await;

    let (status, body) = app.analyze_mood(mood_request()).await;

    assert_eq!(status, StatusCode::OK);
    assert_playlist_invariants(&body);
    assert_eq!(body["total_tracks"], 0);
    assert_eq!(app.spotify.search_calls().await, 0);
}

#[tokio::test]
async fn test_malformed_body_returns_server_error() {
    let app = TestApp::start().await;

    let (status, body) = app
        .post_raw(
            "/analyze_mood",
            Some("application/json"),
            "{not json".to_string(),
        )
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().starts_with("Server error: "));
    assert_eq!(app.llm.completion_calls().await, 0);
}

#[tokio::test]
async fn test_missing_content_type_returns_server_error() {
    let app = TestApp::start().await;

    let (status, body) = app
        .post_raw("/analyze_mood", None, mood_request().to_string())
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().starts_with("Server error: "));
}
