//! Stockroom Server library.
//!
//! This crate provides the REST backend as a library, allowing it to be
//! tested and reused. The binary in `main.rs` is a thin wrapper that loads
//! configuration, initializes tracing, and serves the router.
//!
//! # Boundaries
//!
//! The server owns nothing but the HTTP boundary: it validates input via
//! `stockroom-core`, mutates and queries the catalog via
//! `stockroom-catalog`, and maps every error onto a status code and a JSON
//! `{message}` body. State lives in memory for the lifetime of the process.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use error::AppError;
pub use routes::app;
pub use state::AppState;
