//! Supabase adapters
//!
//! - [`SupabaseIdentityVerifier`]: resolves bearer tokens through the auth
//!   endpoint (`/auth/v1/user`)
//! - [`PostgrestStoreFactory`]: builds per-request record stores that talk to
//!   PostgREST (`/rest/v1/dates`) with the caller's token, so row-level
//!   security decides what each caller can see and change
//!
//! Both share one [`SupabaseProject`], which owns the pooled HTTP client.

pub mod auth;
pub mod store;

use std::sync::Arc;
use std::time::Duration;

use datelog_domain::{BearerToken, Result, SupabaseConfig};
use reqwest::{Method, RequestBuilder};

use crate::http::HttpClient;

pub use auth::SupabaseIdentityVerifier;
pub use store::{PostgrestDateStore, PostgrestStoreFactory};

const AUTH_USER_PATH: &str = "/auth/v1/user";
const REST_PATH: &str = "/rest/v1";

/// Connection settings and HTTP pool for one Supabase project.
#[derive(Clone)]
pub struct SupabaseProject {
    http: HttpClient,
    base_url: Arc<str>,
    anon_key: Arc<str>,
}

impl SupabaseProject {
    /// Build a project handle with its own HTTP client.
    pub fn new(config: &SupabaseConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("datelog/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_http(config, http))
    }

    /// Build a project handle around an existing client.
    pub fn with_http(config: &SupabaseConfig, http: HttpClient) -> Self {
        Self {
            http,
            base_url: Arc::from(config.url.trim_end_matches('/')),
            anon_key: Arc::from(config.anon_key.as_str()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &HttpClient {
        &self.http
    }

    pub(crate) fn auth_user_url(&self) -> String {
        format!("{}{}", self.base_url, AUTH_USER_PATH)
    }

    pub(crate) fn table_url(&self, table: &str) -> String {
        format!("{}{}/{}", self.base_url, REST_PATH, table)
    }

    /// Request carrying the project key and the caller's bearer token.
    pub(crate) fn request(&self, method: Method, url: &str, token: &BearerToken) -> RequestBuilder {
        self.http
            .request(method, url)
            .header("apikey", self.anon_key.as_ref())
            .header(reqwest::header::AUTHORIZATION, token.authorization_value())
    }
}
