//! Identity types
//!
//! A verified identity is produced by the authentication gate from a bearer
//! credential and lives for the duration of one request.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a user as issued by the external identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque bearer credential presented by a client.
///
/// `Debug` never prints the token itself.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Raw token value, for forwarding to collaborators only.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Value for an `Authorization` header.
    pub fn authorization_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BearerToken").field(&"<redacted>").finish()
    }
}

/// Verified identity returned by the identity verifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(rename = "id")]
    pub user_id: UserId,
    #[serde(default)]
    pub email: Option<String>,
}

impl Identity {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id, email: None }
    }
}

/// Request-scoped pairing of the verified identity and the credential that
/// proved it. Scoped storage handles are built from a session and must not
/// outlive the request.
#[derive(Debug, Clone)]
pub struct Session {
    pub identity: Identity,
    pub token: BearerToken,
}

impl Session {
    pub fn new(identity: Identity, token: BearerToken) -> Self {
        Self { identity, token }
    }

    pub fn user_id(&self) -> &UserId {
        &self.identity.user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_token_debug_is_redacted() {
        let token = BearerToken::new("super-secret");
        let rendered = format!("{token:?}");
        assert!(!rendered.contains("super-secret"));
        assert_eq!(token.authorization_value(), "Bearer super-secret");
    }

    #[test]
    fn identity_reads_provider_payload() {
        let identity: Identity =
            serde_json::from_str(r#"{"id":"user-1","email":"a@example.com","aud":"authenticated"}"#)
                .unwrap();
        assert_eq!(identity.user_id.as_str(), "user-1");
        assert_eq!(identity.email.as_deref(), Some("a@example.com"));
    }
}
