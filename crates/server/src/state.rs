//! Application state shared across handlers.

use std::sync::Arc;

use stockroom_catalog::ProductCatalog;
use tokio::sync::RwLock;

use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The catalog sits behind an async `RwLock`
/// only to satisfy the shared-state requirements of the async boundary:
/// each handler holds the lock for its whole operation, so catalog commands
/// stay one-at-a-time and atomic with respect to the caller.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    catalog: RwLock<ProductCatalog>,
}

impl AppState {
    /// Create a new application state, seeding the demo inventory when the
    /// configuration asks for it.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let catalog = if config.seed {
            stockroom_catalog::demo_catalog()
        } else {
            ProductCatalog::new()
        };

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: RwLock::new(catalog),
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog lock.
    #[must_use]
    pub fn catalog(&self) -> &RwLock<ProductCatalog> {
        &self.inner.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_state_has_demo_inventory() {
        let state = AppState::new(ServerConfig::for_tests());
        assert_eq!(state.catalog().read().await.len(), 3);
    }

    #[tokio::test]
    async fn test_unseeded_state_is_empty() {
        let config = ServerConfig {
            seed: false,
            ..ServerConfig::for_tests()
        };
        let state = AppState::new(config);
        assert!(state.catalog().read().await.is_empty());
    }
}
