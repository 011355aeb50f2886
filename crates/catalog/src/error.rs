//! Catalog mutation errors.

use stockroom_core::{FieldErrors, ProductId};
use thiserror::Error;

/// Errors reported by catalog mutation commands.
///
/// Never fatal: validation failures stay field-addressable and lookups
/// against a missing identity report which one was missing. No command is
/// retried - every operation is synchronous and in-memory, so it cannot
/// partially fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// The candidate record failed validation; carries the field-error map.
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    /// No entry with this identity exists in the collection.
    #[error("product not found: {0}")]
    NotFound(ProductId),
}

impl From<FieldErrors> for CatalogError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}
