//! Authentication gate
//!
//! Runs before any route under the authenticated scope: extracts the bearer
//! token, verifies it, and hands the handler a [`DateRecordService`] bound to
//! a storage handle built for this request alone. A request that fails here
//! never touches storage.

use std::ops::Deref;
use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use datelog_core::DateRecordService;
use datelog_domain::constants::{BEARER_PREFIX, MSG_MISSING_TOKEN};
use datelog_domain::{BearerToken, DateLogError, Result, Session};
use tracing::debug;

use super::AppContext;
use crate::errors::ApiError;

/// Record service scoped to the verified caller of the current request.
pub struct AuthenticatedService(pub DateRecordService);

impl Deref for AuthenticatedService {
    type Target = DateRecordService;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<Arc<AppContext>> for AuthenticatedService {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        ctx: &Arc<AppContext>,
    ) -> std::result::Result<Self, Self::Rejection> {
        let header = parts.headers.get(AUTHORIZATION).and_then(|value| value.to_str().ok());
        let token = parse_bearer(header)?;

        let identity = ctx.verifier.verify(&token).await?;
        debug!(user_id = %identity.user_id, "request authenticated");

        let session = Session::new(identity, token);
        let service = DateRecordService::for_session(ctx.stores.as_ref(), &session)?;
        Ok(Self(service))
    }
}

/// Extract the token from an `Authorization` header value.
///
/// The token is exactly what follows `Bearer `; it must be non-empty and
/// contain no whitespace, so extra padding after the scheme is rejected.
pub fn parse_bearer(header: Option<&str>) -> Result<BearerToken> {
    header
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .filter(|token| !token.is_empty() && !token.contains(char::is_whitespace))
        .map(BearerToken::new)
        .ok_or_else(|| DateLogError::Unauthorized(MSG_MISSING_TOKEN.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_bearer_header() {
        let token = parse_bearer(Some("Bearer abc.def.ghi")).unwrap();
        assert_eq!(token.expose(), "abc.def.ghi");
    }

    #[test]
    fn rejects_missing_or_malformed_headers() {
        for header in [
            None,
            Some(""),
            Some("Bearer"),
            Some("Bearer "),
            Some("Bearer   "),
            Some("Bearer  abc"),
            Some("Bearer abc def"),
            Some("Basic abc"),
            Some("bearer abc"),
        ] {
            let err = parse_bearer(header).unwrap_err();
            assert_eq!(err.client_message(), "Unauthorized: Missing or invalid token format");
        }
    }
}
