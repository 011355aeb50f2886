//! Wire types for the remote catalog.
//!
//! The remote representation uses `quantity` where the in-memory model uses
//! `stock`; [`RemoteProduct::into_product`] maps between the two at the
//! boundary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use stockroom_core::{Category, Product, ProductId};

/// A product as the remote represents it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteProduct {
    pub id: ProductId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: Decimal,
    /// Remote name for the model's `stock` field.
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl RemoteProduct {
    /// Map into the in-memory model, renaming `quantity` to `stock`.
    #[must_use]
    pub fn into_product(self) -> (ProductId, Product) {
        (
            self.id,
            Product {
                name: self.name,
                description: self.description,
                price: self.price,
                stock: self.quantity,
                category: self.category,
            },
        )
    }
}

/// A successful credential check: `{token, user}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginSession {
    pub token: String,
    pub user: RemoteUser,
}

/// The logged-in user as the remote represents it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteUser {
    pub identifier: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_product_maps_quantity_to_stock() {
        let remote: RemoteProduct = serde_json::from_value(serde_json::json!({
            "id": 4,
            "name": "Watch",
            "price": "99.00",
            "quantity": 7,
        }))
        .unwrap();

        let (id, product) = remote.into_product();
        assert_eq!(id, ProductId::new(4));
        assert_eq!(product.stock, 7);
        assert_eq!(product.description, None);
        assert_eq!(product.category, None);
    }

    #[test]
    fn test_login_session_shape() {
        let session: LoginSession = serde_json::from_value(serde_json::json!({
            "token": "abc123",
            "user": { "identifier": "admin" },
        }))
        .unwrap();
        assert_eq!(session.user.identifier, "admin");
    }
}
