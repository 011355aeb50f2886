//! Remote failure taxonomy.

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when talking to a remote catalog.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The base URL could not be parsed.
    #[error("invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote answered with a non-2xx status; carries the status and
    /// the `{message}` body when one was present, the raw body otherwise.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse a success response body.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Optional error body shape: `{message}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Extract the failure message from a non-2xx body.
pub(crate) fn failure_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map_or_else(|_| body.to_owned(), |parsed| parsed.message)
}

/// Pass a success response through; turn a non-2xx response into
/// [`RemoteError::Api`] with the message surfaced unchanged.
pub(crate) async fn check(response: reqwest::Response) -> Result<reqwest::Response, RemoteError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(RemoteError::Api {
        status: status.as_u16(),
        message: failure_message(&body),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_from_json_body() {
        assert_eq!(
            failure_message(r#"{"message": "Product 9 not found"}"#),
            "Product 9 not found"
        );
    }

    #[test]
    fn test_failure_message_falls_back_to_raw_body() {
        assert_eq!(failure_message("gateway timeout"), "gateway timeout");
        assert_eq!(failure_message(""), "");
    }
}
