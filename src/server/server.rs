use anyhow::{Context, Result};
use std::sync::Arc;

use tracing::info;

use axum::{extract::State, middleware, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};

use super::{log_requests, make_search_routes, state::*, ServerConfig};
use crate::corpus::Corpus;

#[derive(Serialize)]
struct HomeResponse {
    message: String,
}

async fn home(State(config): State<ServerConfig>) -> impl IntoResponse {
    Json(HomeResponse {
        message: format!("{} Lyrics Search API", config.artist_name),
    })
}

/// Requests are accepted from any origin.
fn make_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn make_app(config: ServerConfig, corpus: GuardedCorpus) -> Router {
    let state = ServerState { config, corpus };

    let home_router: Router = Router::new()
        .route("/", get(home))
        .with_state(state.clone());

    home_router
        .merge(make_search_routes(state.clone()))
        .layer(middleware::from_fn_with_state(state, log_requests))
        .layer(make_cors_layer())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    info!("Shutting down...");
}

pub async fn run_server(config: ServerConfig, corpus: Corpus) -> Result<()> {
    let address = config.listen_address();
    let app = make_app(config, Arc::new(corpus));

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!("Ready to serve at {}!", address);
    Ok(axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?)
}
