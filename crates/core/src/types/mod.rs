//! Core types for Stockroom.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod credential;
pub mod id;
pub mod product;

pub use credential::Credential;
pub use id::*;
pub use product::{Category, CategoryError, Product, ProductDraft, ProductPatch};
