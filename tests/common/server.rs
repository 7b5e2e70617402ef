//! Test server lifecycle management
//!
//! Each test gets an isolated server with its own corpus file.

use super::constants::*;
use super::fixtures::create_test_corpus;
use lyrics_search::config::{AppConfig, CliConfig};
use lyrics_search::corpus::{load_corpus, CorpusFormat};
use lyrics_search::server::{make_app, RequestsLoggingLevel};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Test server instance with an isolated corpus
///
/// When dropped, the server gracefully shuts down and temp resources are cleaned up.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The port the server is listening on
    #[allow(dead_code)]
    pub port: u16,

    // Private fields - keep resources alive until drop
    _temp_corpus_dir: TempDir,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a new test server on a random port
    ///
    /// # Panics
    ///
    /// Panics if the corpus can't be written or loaded, or if the server
    /// doesn't become ready within timeout.
    pub async fn spawn() -> Self {
        let (temp_corpus_dir, corpus_path) =
            create_test_corpus().expect("Failed to create test corpus");

        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();
        let base_url = format!("http://127.0.0.1:{}", port);

        let cli = CliConfig {
            corpus_path: Some(corpus_path),
            format: CorpusFormat::Capitalized,
            bind_address: "127.0.0.1".to_string(),
            port,
            logging_level: RequestsLoggingLevel::None,
            artist_name: ARTIST_NAME.to_string(),
        };
        let app_config = AppConfig::resolve(&cli, None).expect("Failed to resolve config");
        let corpus = load_corpus(&app_config.corpus_path, &app_config.corpus_schema)
            .expect("Failed to load corpus");

        let app = make_app(app_config.server_config(), Arc::new(corpus));

        // Create shutdown channel
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        // Spawn server in background task with graceful shutdown
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        let server = Self {
            base_url,
            port,
            _temp_corpus_dir: temp_corpus_dir,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Waits for the server to become ready by polling `/`
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            match client.get(format!("{}/", self.base_url)).send().await {
                Ok(response) if response.status().is_success() => return,
                _ => {
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        // Send shutdown signal
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
