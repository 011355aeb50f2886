//! Stockroom Catalog - the collection view engine.
//!
//! Owns the authoritative in-memory product sequence and exposes derived,
//! read-only projections plus mutation commands. The catalog is an explicitly
//! owned value - callers hold it and pass it by reference - so ownership and
//! mutation stay traceable without any ambient state.
//!
//! # Modules
//!
//! - [`catalog`] - [`ProductCatalog`]: the owned sequence and its commands
//! - [`view`] - [`ViewState`]: search/filter/sort parameters for projections
//! - [`error`] - [`CatalogError`]: the mutation failure taxonomy
//! - [`seed`] - the fixed demo inventory loaded at session start

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod error;
pub mod seed;
pub mod view;

pub use catalog::{ProductCatalog, StoredProduct};
pub use error::CatalogError;
pub use seed::{demo_catalog, demo_inventory};
pub use view::{ParseViewError, SortDirection, SortKey, ViewState};
