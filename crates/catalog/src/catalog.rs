//! The authoritative product sequence and its commands.

use serde::{Deserialize, Serialize};
use stockroom_core::{
    Product, ProductDraft, ProductId, ProductPatch, validate_product,
};

use crate::error::CatalogError;
use crate::view::ViewState;

/// An entry of the authoritative sequence: a product plus the stable
/// identity assigned to it at creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredProduct {
    pub id: ProductId,
    #[serde(flatten)]
    pub product: Product,
}

/// The in-memory product collection.
///
/// Insertion order is the canonical order absent an active sort. Duplicate
/// names are permitted; entries are targeted by their assigned [`ProductId`]
/// only. The catalog lives for the session and is discarded with it - there
/// is no persistence layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCatalog {
    entries: Vec<StoredProduct>,
    next_id: i32,
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a catalog pre-populated with already-validated products,
    /// assigning identities in iteration order.
    #[must_use]
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut catalog = Self::new();
        for product in products {
            catalog.push(product);
        }
        catalog
    }

    /// Number of entries in the authoritative sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The full authoritative collection, unfiltered, in stored order.
    #[must_use]
    pub fn list(&self) -> &[StoredProduct] {
        &self.entries
    }

    /// Look up a single entry by identity.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&StoredProduct> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Derive the filtered/sorted projection for a view state.
    ///
    /// Computed freshly on every call - nothing is cached across mutations.
    /// Filtering applies the view's text search AND category filter; sorting
    /// (when a key is set) is stable, so ties keep their relative filtered
    /// order rather than falling back to a secondary key.
    #[must_use]
    pub fn projected(&self, view: &ViewState) -> Vec<&StoredProduct> {
        let mut rows: Vec<&StoredProduct> = self
            .entries
            .iter()
            .filter(|entry| view.matches(&entry.product))
            .collect();

        if let Some(key) = view.sort_key {
            rows.sort_by(|a, b| {
                view.sort_direction
                    .apply(key.compare(&a.product, &b.product))
            });
        }

        rows
    }

    /// Validate a draft and append it to the end of the sequence.
    ///
    /// Returns the stored entry with its assigned identity.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Validation`] with the field-error map if the
    /// draft fails validation; the collection is left unchanged.
    pub fn create(&mut self, draft: &ProductDraft) -> Result<&StoredProduct, CatalogError> {
        let product = validate_product(draft).into_result()?;
        let id = self.push(product);
        // push appended the entry, so last() cannot miss
        self.entries.last().ok_or(CatalogError::NotFound(id))
    }

    /// Merge a patch over an existing entry, re-validate, and replace it in
    /// place, preserving its position.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if the identity does not resolve,
    /// or [`CatalogError::Validation`] if the merged record fails validation.
    /// Either way the collection is left unchanged.
    pub fn update(
        &mut self,
        id: ProductId,
        patch: &ProductPatch,
    ) -> Result<&StoredProduct, CatalogError> {
        let position = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(CatalogError::NotFound(id))?;

        let entry = self
            .entries
            .get(position)
            .ok_or(CatalogError::NotFound(id))?;
        let merged = patch.merge_onto(&entry.product);
        let product = validate_product(&merged).into_result()?;

        let entry = self
            .entries
            .get_mut(position)
            .ok_or(CatalogError::NotFound(id))?;
        entry.product = product;
        self.entries.get(position).ok_or(CatalogError::NotFound(id))
    }

    /// Remove an entry by identity. No cascading effects.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] if the identity does not resolve.
    pub fn delete(&mut self, id: ProductId) -> Result<Product, CatalogError> {
        let position = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(CatalogError::NotFound(id))?;
        Ok(self.entries.remove(position).product)
    }

    /// Append an already-validated product, assigning the next identity.
    fn push(&mut self, product: Product) -> ProductId {
        let id = ProductId::new(self.next_id);
        self.next_id += 1;
        self.entries.push(StoredProduct { id, product });
        id
    }
}
