//! Client for the remote product catalog.

use serde_json::json;
use stockroom_core::{ProductDraft, ProductId};
use url::Url;

use crate::error::{self, RemoteError};
use crate::types::RemoteProduct;

/// HTTP client for the remote catalog's product CRUD.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new catalog client for a base URL such as
    /// `http://localhost:8080`.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::InvalidUrl`] if the base URL does not parse.
    pub fn new(base_url: &str) -> Result<Self, RemoteError> {
        let parsed = Url::parse(base_url)?;
        Ok(Self {
            client: reqwest::Client::new(),
            base_url: parsed.as_str().trim_end_matches('/').to_owned(),
        })
    }

    /// GET /api/products - fetch all products.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] if the request fails or the remote answers
    /// with a non-2xx status.
    pub async fn list(&self) -> Result<Vec<RemoteProduct>, RemoteError> {
        let url = format!("{}/api/products", self.base_url);
        let response = error::check(self.client.get(&url).send().await?).await?;
        response
            .json()
            .await
            .map_err(|e| RemoteError::Parse(e.to_string()))
    }

    /// GET /api/products/{id} - fetch one product by identity.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::Api`] with status 404 if the identity does
    /// not resolve.
    pub async fn get(&self, id: ProductId) -> Result<RemoteProduct, RemoteError> {
        let url = format!("{}/api/products/{id}", self.base_url);
        let response = error::check(self.client.get(&url).send().await?).await?;
        response
            .json()
            .await
            .map_err(|e| RemoteError::Parse(e.to_string()))
    }

    /// POST /api/products - create a product from a draft.
    ///
    /// The draft's fields go over the wire as the user typed them; the
    /// remote's validation engine owns the parse and reports field errors
    /// through a 400 response.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::Api`] with status 400 on validation failure.
    pub async fn create(&self, draft: &ProductDraft) -> Result<RemoteProduct, RemoteError> {
        let url = format!("{}/api/products", self.base_url);
        let response = error::check(
            self.client
                .post(&url)
                .json(&draft_body(draft))
                .send()
                .await?,
        )
        .await?;
        response
            .json()
            .await
            .map_err(|e| RemoteError::Parse(e.to_string()))
    }

    /// PUT /api/products/{id} - replace a product with a full draft.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::Api`] with status 404 for a missing identity
    /// or 400 on validation failure.
    pub async fn update(
        &self,
        id: ProductId,
        draft: &ProductDraft,
    ) -> Result<RemoteProduct, RemoteError> {
        let url = format!("{}/api/products/{id}", self.base_url);
        let response = error::check(
            self.client
                .put(&url)
                .json(&draft_body(draft))
                .send()
                .await?,
        )
        .await?;
        response
            .json()
            .await
            .map_err(|e| RemoteError::Parse(e.to_string()))
    }

    /// DELETE /api/products/{id} - remove a product.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::Api`] with status 404 for a missing identity.
    pub async fn delete(&self, id: ProductId) -> Result<(), RemoteError> {
        let url = format!("{}/api/products/{id}", self.base_url);
        error::check(self.client.delete(&url).send().await?).await?;
        Ok(())
    }
}

/// Render a draft as the wire body, renaming `stock` to `quantity`.
fn draft_body(draft: &ProductDraft) -> serde_json::Value {
    json!({
        "name": draft.name,
        "description": draft.description,
        "price": draft.price,
        "quantity": draft.stock,
        "category": draft.category,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_base_url() {
        assert!(matches!(
            CatalogClient::new("not a url"),
            Err(RemoteError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let client = CatalogClient::new("http://localhost:8080/").unwrap();
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_draft_body_uses_wire_names() {
        let draft = ProductDraft {
            name: "Watch".to_owned(),
            description: String::new(),
            price: "99.5".to_owned(),
            stock: "3".to_owned(),
            category: "Electronics".to_owned(),
        };
        let body = draft_body(&draft);
        assert_eq!(body.get("quantity"), Some(&json!("3")));
        assert!(body.get("stock").is_none());
        assert_eq!(body.get("price"), Some(&json!("99.5")));
    }
}
