//! Integration tests for Stockroom.
//!
//! Each test spawns a fresh server in-process on an ephemeral port, so
//! tests are isolated and need no external setup:
//!
//! ```bash
//! cargo test -p stockroom-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use stockroom_server::{AppState, ServerConfig, app};

/// A freshly spawned in-process server.
pub struct TestServer {
    /// Base URL for requests, e.g. `http://127.0.0.1:49321`.
    pub base_url: String,
}

impl TestServer {
    /// Spawn a server with the default test configuration: seeded demo
    /// inventory and the `admin` / `stock1room` demo credential.
    pub async fn spawn() -> Self {
        Self::spawn_with(ServerConfig::for_tests()).await
    }

    /// Spawn a server with a custom configuration on an ephemeral port.
    pub async fn spawn_with(config: ServerConfig) -> Self {
        let state = AppState::new(config);
        let router = app(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");

        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Test server error");
        });

        Self {
            base_url: format!("http://{addr}"),
        }
    }
}
