// ABOUTME: Opaque bearer credential supplied by the caller for a deployment.
// ABOUTME: Wraps the token in a secret so it never appears in logs or Debug output.

use secrecy::{ExposeSecret, SecretString};

/// Bearer token handed to the platform adapter. Its shape is never validated.
pub struct Credential(SecretString);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::from(token.into()))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}
