//! End-to-end tests for the login endpoint.

#![allow(clippy::unwrap_used)]

use stockroom_client::{AuthClient, RemoteError};
use stockroom_integration_tests::TestServer;

#[tokio::test]
async fn test_login_accepts_demo_credential() {
    let server = TestServer::spawn().await;
    let client = AuthClient::new(&server.base_url).unwrap();

    let session = client.login("admin", "stock1room").await.unwrap();
    assert_eq!(session.user.identifier, "admin");
    assert_eq!(session.token.len(), 32);
}

#[tokio::test]
async fn test_login_rejects_wrong_secret() {
    let server = TestServer::spawn().await;
    let client = AuthClient::new(&server.base_url).unwrap();

    let err = client.login("admin", "wrong1pass").await.unwrap_err();
    match err {
        RemoteError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid identifier or secret");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_login_reports_field_errors() {
    let server = TestServer::spawn().await;

    let response = reqwest::Client::new()
        .post(format!("{}/api/auth/login", server.base_url))
        .json(&serde_json::json!({ "identifier": "", "secret": "short" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 401);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["errors"]["identifier"], "Identifier is required");
    assert!(body["errors"]["secret"].is_string());
}

#[tokio::test]
async fn test_login_trims_identifier() {
    let server = TestServer::spawn().await;
    let client = AuthClient::new(&server.base_url).unwrap();

    let session = client.login("  admin  ", "stock1room").await.unwrap();
    assert_eq!(session.user.identifier, "admin");
}
