//! Stockroom Client - HTTP client for a remote Stockroom catalog.
//!
//! Mirrors the REST boundary exposed by `stockroom-server`: product CRUD at
//! `/api/products` and the mocked credential check at `/api/auth/login`.
//! Remote failures are surfaced unchanged as `{status, message}` - the
//! client does not retry and does not interpret status codes; retry policy,
//! if any, belongs to the caller.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod catalog;
pub mod error;
pub mod types;

pub use auth::AuthClient;
pub use catalog::CatalogClient;
pub use error::RemoteError;
pub use types::{LoginSession, RemoteProduct, RemoteUser};
