//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                - Health check
//!
//! # Auth
//! POST   /api/auth/login        - Check a credential, returns {token, user}
//!
//! # Products
//! GET    /api/products          - Projected list (?search=&category=&sort=&direction=)
//! POST   /api/products          - Create a product
//! GET    /api/products/{id}     - Product by identity
//! PUT    /api/products/{id}     - Replace a product, preserving its position
//! DELETE /api/products/{id}     - Remove a product
//! ```

pub mod auth;
pub mod health;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/auth/login", post(auth::login))
        .route("/api/products", get(products::list).post(products::create))
        .route(
            "/api/products/{id}",
            get(products::show)
                .put(products::update)
                .delete(products::remove),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
