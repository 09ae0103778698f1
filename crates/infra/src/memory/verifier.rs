//! Static token table for local development

use std::collections::HashMap;

use async_trait::async_trait;
use datelog_core::IdentityVerifier;
use datelog_domain::constants::MSG_INVALID_TOKEN;
use datelog_domain::{BearerToken, DateLogError, Identity, MemoryBackendConfig, Result, UserId};
use tracing::debug;

/// Accepts exactly the tokens listed in configuration.
#[derive(Debug, Clone, Default)]
pub struct StaticTokenVerifier {
    tokens: HashMap<String, UserId>,
}

impl StaticTokenVerifier {
    pub fn new<I, T, U>(entries: I) -> Self
    where
        I: IntoIterator<Item = (T, U)>,
        T: Into<String>,
        U: Into<String>,
    {
        let tokens =
            entries.into_iter().map(|(token, user)| (token.into(), UserId::new(user))).collect();
        Self { tokens }
    }

    pub fn from_config(config: &MemoryBackendConfig) -> Self {
        Self::new(config.tokens.iter().map(|(token, user)| (token.as_str(), user.as_str())))
    }
}

#[async_trait]
impl IdentityVerifier for StaticTokenVerifier {
    async fn verify(&self, token: &BearerToken) -> Result<Identity> {
        match self.tokens.get(token.expose()) {
            Some(user_id) => Ok(Identity::new(user_id.clone())),
            None => {
                debug!("token not present in static table");
                Err(DateLogError::Unauthorized(MSG_INVALID_TOKEN.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn known_token_resolves_to_user() {
        let verifier = StaticTokenVerifier::new([("token-a", "user-a")]);
        let identity = verifier.verify(&BearerToken::new("token-a")).await.unwrap();
        assert_eq!(identity.user_id, UserId::new("user-a"));
    }

    #[tokio::test]
    async fn unknown_token_is_unauthorized() {
        let verifier = StaticTokenVerifier::default();
        let err = verifier.verify(&BearerToken::new("nope")).await.unwrap_err();
        assert_eq!(err.client_message(), "Unauthorized: Invalid token or user not found");
    }
}
