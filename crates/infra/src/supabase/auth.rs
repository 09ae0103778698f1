//! Bearer token verification against Supabase auth

use async_trait::async_trait;
use datelog_core::IdentityVerifier;
use datelog_domain::constants::MSG_INVALID_TOKEN;
use datelog_domain::{BearerToken, DateLogError, Identity, Result};
use reqwest::Method;
use tracing::{debug, instrument, warn};

use super::SupabaseProject;

/// Resolves a token via `GET /auth/v1/user`.
///
/// Every failure (rejected token, transport error, unexpected payload)
/// becomes `Unauthorized`; the cause is only logged.
#[derive(Clone)]
pub struct SupabaseIdentityVerifier {
    project: SupabaseProject,
}

impl SupabaseIdentityVerifier {
    pub fn new(project: SupabaseProject) -> Self {
        Self { project }
    }
}

#[async_trait]
impl IdentityVerifier for SupabaseIdentityVerifier {
    #[instrument(skip_all)]
    async fn verify(&self, token: &BearerToken) -> Result<Identity> {
        let url = self.project.auth_user_url();
        let request = self.project.request(Method::GET, &url, token);

        let response = self.project.http().send(request).await.map_err(|err| {
            warn!(error = %err, "identity provider unreachable");
            rejected()
        })?;

        let status = response.status();
        if !status.is_success() {
            debug!(%status, "identity provider rejected token");
            return Err(rejected());
        }

        let identity: Identity = response.json().await.map_err(|err| {
            warn!(error = %err, "identity provider returned an unreadable user");
            rejected()
        })?;

        if identity.user_id.as_str().is_empty() {
            warn!("identity provider returned a user without an id");
            return Err(rejected());
        }

        debug!(user_id = %identity.user_id, "token verified");
        Ok(identity)
    }
}

fn rejected() -> DateLogError {
    DateLogError::Unauthorized(MSG_INVALID_TOKEN.to_string())
}
