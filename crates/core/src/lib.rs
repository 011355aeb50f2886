//! Stockroom Core - Shared types library.
//!
//! This crate provides common types used across all Stockroom components:
//! - `catalog` - In-memory product collection with filtered/sorted views
//! - `server` - REST backend exposing the catalog
//! - `client` - HTTP client for a remote catalog
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no logging. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, product records, categories, and credentials
//! - [`validate`] - The validation engine: pure checks over candidate records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;
pub mod validate;

pub use types::*;
pub use validate::{Field, FieldErrors, Validation, validate_credential, validate_product};
