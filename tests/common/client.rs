//! HTTP client for end-to-end tests
//!
//! Wraps reqwest with one method per endpoint. When API routes change,
//! update only this file.

use super::constants::*;
use lyrics_search::server::SearchResponse;
use reqwest::{Response, StatusCode};
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    /// GET /
    pub async fn home(&self) -> Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("Home request failed")
    }

    /// GET /search?query=...
    pub async fn search(&self, query: &str) -> Response {
        self.client
            .get(format!("{}/search", self.base_url))
            .query(&[("query", query)])
            .send()
            .await
            .expect("Search request failed")
    }

    /// Searches and decodes the body, asserting a 200 response.
    pub async fn search_ok(&self, query: &str) -> SearchResponse {
        let response = self.search(query).await;
        assert_eq!(response.status(), StatusCode::OK);
        response
            .json()
            .await
            .expect("Search response is not valid JSON")
    }
}
