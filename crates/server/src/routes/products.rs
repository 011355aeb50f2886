//! Product route handlers and their wire representations.
//!
//! The wire shape of a product is `{id, name, description, price, quantity,
//! category}` - the remote representation uses `quantity` where the
//! in-memory model uses `stock`, and the mapping happens here, at the
//! boundary, in both directions.
//!
//! Numeric request fields accept either a JSON number or a string
//! (form-shaped clients submit strings); non-numeric text flows into the
//! validation engine and comes back as a field error, never a 500.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use stockroom_catalog::{SortDirection, SortKey, StoredProduct, ViewState};
use stockroom_core::{Category, ProductDraft, ProductId, ProductPatch};

use crate::error::AppError;
use crate::state::AppState;

/// A product as it crosses the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductBody {
    pub id: ProductId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: Decimal,
    /// Wire name for the model's `stock` field.
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl From<&StoredProduct> for ProductBody {
    fn from(entry: &StoredProduct) -> Self {
        Self {
            id: entry.id,
            name: entry.product.name.clone(),
            description: entry.product.description.clone(),
            price: entry.product.price,
            quantity: entry.product.stock,
            category: entry.product.category,
        }
    }
}

/// A numeric request field: JSON number or string, kept raw either way so
/// the validation engine owns the parse.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(serde_json::Number),
    Text(String),
}

impl RawNumber {
    fn into_raw(self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s,
        }
    }
}

impl Default for RawNumber {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

/// Create/replace request body. Missing fields become empty strings, which
/// the validation engine reports as "required" field errors.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductRequest {
    pub name: String,
    pub description: String,
    pub price: RawNumber,
    pub quantity: RawNumber,
    pub category: String,
}

impl ProductRequest {
    fn into_draft(self) -> ProductDraft {
        ProductDraft {
            name: self.name,
            description: self.description,
            price: self.price.into_raw(),
            stock: self.quantity.into_raw(),
            category: self.category,
        }
    }

    /// A PUT carries the full representation, so the patch overrides every
    /// field of the existing entry.
    fn into_patch(self) -> ProductPatch {
        let draft = self.into_draft();
        ProductPatch {
            name: Some(draft.name),
            description: Some(draft.description),
            price: Some(draft.price),
            stock: Some(draft.stock),
            category: Some(draft.category),
        }
    }
}

/// List query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListQuery {
    pub search: String,
    pub category: String,
    pub sort: String,
    pub direction: String,
}

impl ListQuery {
    fn into_view_state(self) -> Result<ViewState, AppError> {
        let category = match self.category.trim() {
            "" => None,
            raw => Some(
                Category::from_str(raw)
                    .map_err(|e| AppError::BadRequest(e.to_string()))?,
            ),
        };
        let sort_key = match self.sort.trim() {
            "" => None,
            raw => Some(
                SortKey::from_str(raw).map_err(|e| AppError::BadRequest(e.to_string()))?,
            ),
        };
        let sort_direction = match self.direction.trim() {
            "" => SortDirection::default(),
            raw => SortDirection::from_str(raw)
                .map_err(|e| AppError::BadRequest(e.to_string()))?,
        };

        Ok(ViewState {
            search: self.search,
            category,
            sort_key,
            sort_direction,
        })
    }
}

/// GET /api/products - the projected (filtered/sorted) list.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<ProductBody>>, AppError> {
    let view = query.into_view_state()?;
    let catalog = state.catalog().read().await;
    let rows = catalog
        .projected(&view)
        .into_iter()
        .map(ProductBody::from)
        .collect();
    Ok(Json(rows))
}

/// GET /api/products/{id} - a single product by identity.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ProductBody>, AppError> {
    let id = ProductId::new(id);
    let catalog = state.catalog().read().await;
    let entry = catalog
        .get(id)
        .ok_or(AppError::Catalog(stockroom_catalog::CatalogError::NotFound(id)))?;
    Ok(Json(ProductBody::from(entry)))
}

/// POST /api/products - validate and append a product.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<ProductRequest>,
) -> Result<(StatusCode, Json<ProductBody>), AppError> {
    let draft = body.into_draft();
    let mut catalog = state.catalog().write().await;
    let entry = catalog.create(&draft)?;
    tracing::info!(id = %entry.id, name = %entry.product.name, "product created");
    Ok((StatusCode::CREATED, Json(ProductBody::from(entry))))
}

/// PUT /api/products/{id} - replace a product, preserving its position.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<ProductRequest>,
) -> Result<Json<ProductBody>, AppError> {
    let id = ProductId::new(id);
    let patch = body.into_patch();
    let mut catalog = state.catalog().write().await;
    let entry = catalog.update(id, &patch)?;
    tracing::info!(id = %entry.id, "product updated");
    Ok(Json(ProductBody::from(entry)))
}

/// DELETE /api/products/{id} - remove a product.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let id = ProductId::new(id);
    let mut catalog = state.catalog().write().await;
    let removed = catalog.delete(id)?;
    tracing::info!(id = %id, name = %removed.name, "product deleted");
    Ok(StatusCode::NO_CONTENT)
}
