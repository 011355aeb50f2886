//! Login credential type.

use secrecy::{ExposeSecret, SecretString};

/// A login credential: an identifier (username or email handle) plus a
/// secret.
///
/// Transient - created per login attempt and discarded after validation.
/// Implements `Debug` manually to redact the secret.
#[derive(Clone)]
pub struct Credential {
    identifier: String,
    secret: SecretString,
}

impl Credential {
    /// Create a new credential.
    #[must_use]
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: SecretString::from(secret.into()),
        }
    }

    /// The identifier the user typed.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Expose the secret for comparison at the authentication boundary.
    #[must_use]
    pub fn secret(&self) -> &str {
        self.secret.expose_secret()
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("identifier", &self.identifier)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let credential = Credential::new("alice", "hunter42");
        assert_eq!(credential.identifier(), "alice");
        assert_eq!(credential.secret(), "hunter42");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let credential = Credential::new("alice", "hunter42");
        let debug_output = format!("{credential:?}");

        assert!(debug_output.contains("alice"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("hunter42"));
    }
}
