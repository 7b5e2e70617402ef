//! Search API routes

use crate::search::{search, LyricMatch};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::state::{GuardedCorpus, ServerState};

#[derive(Deserialize)]
struct SearchParams {
    pub query: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SearchResponse {
    /// The query as it was received.
    pub query: String,
    pub results: Vec<LyricMatch>,
}

async fn search_lyrics(
    State(corpus): State<GuardedCorpus>,
    Query(params): Query<SearchParams>,
) -> Response {
    // The scan is CPU bound and grows with the query length
    let scan_corpus = corpus.clone();
    let query = params.query.clone();
    let results = match tokio::task::spawn_blocking(move || search(&scan_corpus, &query)).await
    {
        Ok(results) => results,
        Err(err) => {
            error!("Search \"{}\" failed: {}", params.query, err);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };
    debug!(
        "Search \"{}\" matched {} of {} lines",
        params.query,
        results.len(),
        corpus.lines_count()
    );

    Json(SearchResponse {
        query: params.query,
        results,
    })
    .into_response()
}

pub fn make_search_routes(state: ServerState) -> Router {
    Router::new()
        .route("/search", get(search_lyrics))
        .with_state(state)
}
