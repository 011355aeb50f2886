//! Product records and the fixed category set.
//!
//! Three shapes of the same record move through the system:
//!
//! - [`ProductDraft`] - raw form input, every field a string. Numeric fields
//!   stay unparsed so that non-numeric input becomes a validation failure,
//!   never a runtime error.
//! - [`Product`] - a validated record with parsed, typed fields. Only the
//!   validation engine produces these.
//! - [`ProductPatch`] - per-field overrides merged over an existing record
//!   before re-validation.

use core::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Error parsing a [`Category`] from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct CategoryError(pub String);

/// Product category.
///
/// The allowed set is fixed; anything else is rejected by the validation
/// engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Accessories,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: &'static [Self] = &[Self::Electronics, Self::Accessories];

    /// Returns the category's display name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Accessories => "Accessories",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Electronics" => Ok(Self::Electronics),
            "Accessories" => Ok(Self::Accessories),
            other => Err(CategoryError(other.to_owned())),
        }
    }
}

/// A validated product record.
///
/// Invariants (enforced by [`crate::validate::validate_product`], the only
/// producer of this type outside of tests):
///
/// - `name` is non-blank
/// - `price` is greater than zero
/// - `description`, when present, is at most 500 characters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Display name (non-blank).
    pub name: String,
    /// Optional free-text description, at most 500 characters.
    pub description: Option<String>,
    /// Unit price; always greater than zero.
    pub price: Decimal,
    /// Units on hand.
    pub stock: u32,
    /// Optional category from the fixed allowed set.
    pub category: Option<Category>,
}

impl Product {
    /// Render the record back into draft form (all fields as strings).
    ///
    /// Used when merging a [`ProductPatch`] over an existing record before
    /// re-validation.
    #[must_use]
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            description: self.description.clone().unwrap_or_default(),
            price: self.price.to_string(),
            stock: self.stock.to_string(),
            category: self.category.map(|c| c.as_str().to_owned()).unwrap_or_default(),
        }
    }
}

/// A candidate product as submitted by a form.
///
/// All fields are raw strings; empty strings stand for absent optional
/// fields. Feed this to [`crate::validate::validate_product`] to obtain a
/// [`Product`] or a field-keyed error map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: String,
    pub stock: String,
    #[serde(default)]
    pub category: String,
}

/// Per-field overrides for an existing product.
///
/// `None` keeps the existing value. The merged result must pass validation
/// as a whole before it replaces the original entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub stock: Option<String>,
    pub category: Option<String>,
}

impl ProductPatch {
    /// Merge this patch over an existing record, producing the draft that
    /// must pass validation before the update is applied.
    #[must_use]
    pub fn merge_onto(&self, existing: &Product) -> ProductDraft {
        let base = existing.to_draft();
        ProductDraft {
            name: self.name.clone().unwrap_or(base.name),
            description: self.description.clone().unwrap_or(base.description),
            price: self.price.clone().unwrap_or(base.price),
            stock: self.stock.clone().unwrap_or(base.stock),
            category: self.category.clone().unwrap_or(base.category),
        }
    }
}
