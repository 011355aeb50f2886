//! Client for the remote credential check.

use serde_json::json;
use url::Url;

use crate::error::{self, RemoteError};
use crate::types::LoginSession;

/// HTTP client for the remote login endpoint.
#[derive(Debug, Clone)]
pub struct AuthClient {
    client: reqwest::Client,
    base_url: String,
}

impl AuthClient {
    /// Create a new auth client for a base URL such as
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

    /// POST /api/auth/login - check a credential.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::Api`] with status 401 and the remote's
    /// message when the credential is rejected, surfaced unchanged.
    pub async fn login(&self, identifier: &str, secret: &str) -> Result<LoginSession, RemoteError> {
        let url = format!("{}/api/auth/login", self.base_url);
        let body = json!({ "identifier": identifier, "secret": secret });
        let response = error::check(self.client.post(&url).json(&body).send().await?).await?;
        response
            .json()
            .await
            .map_err(|e| RemoteError::Parse(e.to_string()))
    }
}
