//! Test server lifecycle management
//!
//! Each test gets an isolated server with its own assets directory.

use super::constants::*;
use super::fixtures::{create_test_assets, AssetsFixture};
use movielens_dashboard::editorial::Editorial;
use movielens_dashboard::server::{make_app, RequestsLoggingLevel, ServerConfig};
use movielens_dashboard::{AssetsLayout, DashboardCache};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Test server instance with an isolated assets directory
///
/// When dropped, the server gracefully shuts down and the assets are removed.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// Shared with the running server, for inspecting cache state
    pub cache: Arc<DashboardCache>,

    client: reqwest::Client,

    // Private fields - keep resources alive until drop
    _temp_assets_dir: TempDir,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a new test server with the complete fixture
    pub async fn spawn() -> Self {
        Self::spawn_with(AssetsFixture::default()).await
    }

    /// Spawns a new test server on a random port
    ///
    /// # Panics
    ///
    /// Panics if the fixture cannot be written, the port cannot be bound or
    /// the server does not become ready within the timeout.
    pub async fn spawn_with(fixture: AssetsFixture) -> Self {
        let temp_assets_dir = create_test_assets(&fixture).expect("Failed to create test assets");

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");

        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let base_url = format!("http://127.0.0.1:{}", port);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let config = ServerConfig {
            port,
            requests_logging_level: RequestsLoggingLevel::None,
            content_cache_age_sec: 0, // Disable caching in tests
            ..ServerConfig::default()
        };

        let cache = Arc::new(DashboardCache::new(AssetsLayout::new(
            temp_assets_dir.path(),
        )));

        let app = make_app(config, cache.clone(), Arc::new(Editorial::default()))
            .expect("Failed to build app");

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
            cache,
            client: reqwest::Client::new(),
            _temp_assets_dir: temp_assets_dir,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Sends a GET request to the given path
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .expect("Request failed")
    }

    /// Sends a GET request and returns the body, asserting success
    pub async fn get_text(&self, path: &str) -> String {
        let response = self.get(path).await;
        assert!(
            response.status().is_success(),
            "GET {} returned {}",
            path,
            response.status()
        );
        response.text().await.expect("Failed to read body")
    }

    /// Waits for the server to become ready by polling the /health endpoint
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

            match client.get(format!("{}/health", self.base_url)).send().await {
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
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
