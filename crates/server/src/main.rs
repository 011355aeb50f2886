//! Stockroom Server - REST backend for the demo catalog.
//!
//! Serves the product CRUD API and the mocked login endpoint on a
//! configurable address (default 127.0.0.1:8080). State lives in memory for
//! the lifetime of the process; there is no persistence layer.

#![cfg_attr(not(test), forbid(unsafe_code))]

use stockroom_server::{AppState, ServerConfig, app};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "stockroom_server=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = config.socket_addr();
    let state = AppState::new(config);
    let router = app(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    tracing::info!("Stockroom server listening on {addr}");

    axum::serve(listener, router)
        .await
        .expect("Server error");
}
