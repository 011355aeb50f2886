//! End-to-end tests for the product CRUD and projection endpoints.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use stockroom_client::{CatalogClient, RemoteError};
use stockroom_core::{ProductDraft, ProductId};
use stockroom_integration_tests::TestServer;

fn watch_draft() -> ProductDraft {
    ProductDraft {
        name: "Mechanical Keyboard".to_owned(),
        description: "Hot-swappable switches".to_owned(),
        price: "120.00".to_owned(),
        stock: "15".to_owned(),
        category: "Accessories".to_owned(),
    }
}

#[tokio::test]
async fn test_crud_round_trip() {
    let server = TestServer::spawn().await;
    let client = CatalogClient::new(&server.base_url).unwrap();

    let seeded = client.list().await.unwrap();
    assert_eq!(seeded.len(), 3);

    let created = client.create(&watch_draft()).await.unwrap();
    assert_eq!(created.id, ProductId::new(4));
    assert_eq!(created.name, "Mechanical Keyboard");
    assert_eq!(created.price, Decimal::new(12000, 2));
    assert_eq!(created.quantity, 15);

    let fetched = client.get(created.id).await.unwrap();
    assert_eq!(fetched, created);

    let mut draft = watch_draft();
    draft.price = "99.90".to_owned();
    let updated = client.update(created.id, &draft).await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.price, Decimal::new(9990, 2));

    client.delete(created.id).await.unwrap();
    let remaining = client.list().await.unwrap();
    assert_eq!(remaining.len(), 3);
    assert!(remaining.iter().all(|p| p.id != created.id));
}

#[tokio::test]
async fn test_create_invalid_draft_reports_field_errors() {
    let server = TestServer::spawn().await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/products", server.base_url))
        .json(&serde_json::json!({
            "name": "  ",
            "price": "free",
            "quantity": -2,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Validation failed");
    assert_eq!(body["errors"]["name"], "Name is required");
    assert_eq!(body["errors"]["price"], "Price must be a number");
    assert_eq!(body["errors"]["stock"], "Stock must not be negative");
}

#[tokio::test]
async fn test_invalid_draft_leaves_catalog_unchanged() {
    let server = TestServer::spawn().await;
    let client = CatalogClient::new(&server.base_url).unwrap();

    let mut draft = watch_draft();
    draft.price = "-1".to_owned();
    let err = client.create(&draft).await.unwrap_err();
    assert!(matches!(err, RemoteError::Api { status: 400, .. }));

    assert_eq!(client.list().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_missing_identity_reports_not_found() {
    let server = TestServer::spawn().await;
    let client = CatalogClient::new(&server.base_url).unwrap();
    let missing = ProductId::new(999);

    let err = client.get(missing).await.unwrap_err();
    assert!(matches!(err, RemoteError::Api { status: 404, .. }));

    let err = client.update(missing, &watch_draft()).await.unwrap_err();
    assert!(matches!(err, RemoteError::Api { status: 404, .. }));

    let err = client.delete(missing).await.unwrap_err();
    match err {
        RemoteError::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Product 999 not found");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_projection_search_and_category_combine() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let body: Vec<serde_json::Value> = client
        .get(format!(
            "{}/api/products?search=watch&category=Electronics",
            server.base_url
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["name"], "Smart Watch");

    // Same search with the other category matches nothing.
    let body: Vec<serde_json::Value> = client
        .get(format!(
            "{}/api/products?search=watch&category=Accessories",
            server.base_url
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_projection_sorts_by_price_descending() {
    let server = TestServer::spawn().await;

    let body: Vec<serde_json::Value> = reqwest::Client::new()
        .get(format!(
            "{}/api/products?sort=price&direction=desc",
            server.base_url
        ))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let names: Vec<&str> = body.iter().map(|p| p["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["Smart Watch", "Laptop Stand", "Wireless Earbuds"]);
}

#[tokio::test]
async fn test_projection_rejects_unknown_category() {
    let server = TestServer::spawn().await;

    let response = reqwest::Client::new()
        .get(format!(
            "{}/api/products?category=Furniture",
            server.base_url
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_wire_shape_uses_quantity() {
    let server = TestServer::spawn().await;

    let body: Vec<serde_json::Value> = reqwest::Client::new()
        .get(format!("{}/api/products", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let first = &body[0];
    assert!(first.get("quantity").is_some());
    assert!(first.get("stock").is_none());
    // Prices cross the wire as decimal strings.
    assert_eq!(first["price"], "99.00");
}
