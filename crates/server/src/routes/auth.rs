//! Login route handler.
//!
//! A single mocked credential check: the submitted credential is validated
//! field-by-field, then compared in plaintext against the configured demo
//! credential. There is no session store; the returned token is an opaque
//! random value the demo UI keeps for the page lifetime.

use axum::{Json, extract::State};
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use stockroom_core::validate_credential;

use crate::error::AppError;
use crate::state::AppState;

/// Login request body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub identifier: String,
    pub secret: String,
}

/// Successful login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserBody,
}

/// The logged-in user as it crosses the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserBody {
    pub identifier: String,
}

/// POST /api/auth/login - check a credential.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let credential = validate_credential(&body.identifier, &body.secret)
        .into_result()
        .map_err(AppError::LoginRejected)?;

    if !state
        .config()
        .accepts(credential.identifier(), credential.secret())
    {
        tracing::debug!(identifier = %credential.identifier(), "login rejected");
        return Err(AppError::Unauthorized(
            "Invalid identifier or secret".to_string(),
        ));
    }

    tracing::info!(identifier = %credential.identifier(), "login accepted");
    Ok(Json(LoginResponse {
        token: issue_token(),
        user: UserBody {
            identifier: credential.identifier().to_string(),
        },
    }))
}

/// Generate an opaque random session token.
fn issue_token() -> String {
    let mut bytes = [0u8; 24];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_token_is_opaque_and_unique() {
        let first = issue_token();
        let second = issue_token();
        assert_eq!(first.len(), 32); // 24 bytes, base64 without padding
        assert_ne!(first, second);
    }

    #[test]
    fn test_login_request_missing_fields_default_empty() {
        let request: LoginRequest = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(request.identifier, "");
        assert_eq!(request.secret, "");
    }
}
