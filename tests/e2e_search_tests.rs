//! End-to-end tests for lyrics search
//!
//! Runs the full app on a random port against a small three-song corpus.

mod common;

use common::{
    TestClient, TestServer, SONG_1_ALBUM, SONG_1_TITLE, SONG_2_TITLE, SONG_3_TITLE,
};
use reqwest::StatusCode;

// =============================================================================
// Basic Search Tests
// =============================================================================

#[tokio::test]
async fn test_search_returns_line_with_context() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let body = client.search_ok("wanna").await;

    assert_eq!(body.query, "wanna");
    assert_eq!(body.results.len(), 1);
    let result = &body.results[0];
    assert_eq!(result.title, SONG_1_TITLE);
    assert_eq!(result.album.as_deref(), Some(SONG_1_ALBUM));
    assert_eq!(result.before, "Ooh");
    assert_eq!(result.line, "I just wanna be a part");
    assert_eq!(result.after, "of your symphony");
}

#[tokio::test]
async fn test_search_with_no_results() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let body = client.search_ok("xyzzy").await;

    assert_eq!(body.query, "xyzzy");
    assert!(
        body.results.is_empty(),
        "Search for unrelated term should return empty results"
    );
}

#[tokio::test]
async fn test_search_raw_json_shape() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client.search("symphony").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json["query"], "symphony");
    let first = &json["results"][0];
    assert_eq!(first["title"], SONG_1_TITLE);
    assert_eq!(first["album"], SONG_1_ALBUM);
    assert_eq!(first["before"], "I just wanna be a part");
    assert_eq!(first["match"], "of your symphony");
    assert_eq!(first["after"], "");
}

// =============================================================================
// Matching Semantics
// =============================================================================

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let upper = client.search_ok("LOVE").await;
    let lower = client.search_ok("love").await;

    assert_eq!(upper.query, "LOVE");
    assert_eq!(upper.results, lower.results);
    assert!(!upper.results.is_empty());
}

#[tokio::test]
async fn test_search_keeps_corpus_order() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let body = client.search_ok("love").await;

    let found: Vec<(&str, &str)> = body
        .results
        .iter()
        .map(|r| (r.title.as_str(), r.line.as_str()))
        .collect();
    assert_eq!(
        found,
        vec![
            (SONG_2_TITLE, "I love you so"),
            (SONG_2_TITLE, "Love me too"),
            (SONG_3_TITLE, "Love"),
            (SONG_3_TITLE, "I got love for you"),
        ]
    );
    // The empty line of "Get You" is kept as context
    assert_eq!(body.results[0].after, "");
    assert_eq!(body.results[1].before, "");
}

#[tokio::test]
async fn test_search_tolerates_typos() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let body = client.search_ok("your symphomy").await;

    assert_eq!(body.results.len(), 1);
    assert_eq!(body.results[0].line, "of your symphony");
}

#[tokio::test]
async fn test_search_query_longer_than_lines() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let body = client
        .search_ok("Ooh, I just wanna be a part of your symphony")
        .await;

    let found: Vec<&str> = body.results.iter().map(|r| r.line.as_str()).collect();
    assert_eq!(
        found,
        vec!["Ooh", "I just wanna be a part", "of your symphony"]
    );
}

#[tokio::test]
async fn test_search_very_long_query_answers() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let query = "la ".repeat(700);
    let body = client.search_ok(&query).await;

    assert_eq!(body.query, query);
    assert!(body.results.is_empty());
}

#[tokio::test]
async fn test_search_query_with_special_characters() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let body = client.search_ok("wanna & part?").await;

    assert_eq!(body.query, "wanna & part?");
}

#[tokio::test]
async fn test_search_empty_query_matches_empty_lines() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let body = client.search_ok("").await;

    assert_eq!(body.results.len(), 1);
    assert_eq!(body.results[0].title, SONG_2_TITLE);
    assert_eq!(body.results[0].before, "I love you so");
    assert_eq!(body.results[0].after, "Love me too");
}

// =============================================================================
// Request Validation
// =============================================================================

#[tokio::test]
async fn test_search_requires_query_parameter() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client
        .client
        .get(format!("{}/search", server.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_allows_cross_origin_requests() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client
        .client
        .get(format!("{}/search?query=ooh", server.base_url))
        .header("Origin", "http://localhost:5173")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
}
