//! Token source for the typed client

use async_trait::async_trait;
use datelog_domain::{BearerToken, Result};

/// Trait for providing access tokens
///
/// This trait allows dependency injection and testing with mock providers.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Get a valid access token
    ///
    /// Implementations that hold a refreshable session should refresh here.
    async fn access_token(&self) -> Result<BearerToken>;
}

/// Provider that always returns the same token.
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: BearerToken,
}

impl StaticTokenProvider {
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: BearerToken::new(token) }
    }
}

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Result<BearerToken> {
        Ok(self.token.clone())
    }
}
