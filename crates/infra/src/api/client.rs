//! Typed client for the date log HTTP API
//!
//! Wraps [`HttpClient`] with the bearer token from an
//! [`AccessTokenProvider`]. Failures come back as the same `DateLogError`
//! variants the server produced. Nothing is retried; every call is one
//! round trip.

use std::sync::Arc;
use std::time::Duration;

use datelog_core::RecordState;
use datelog_domain::constants::{API_BASE_PATH, AUTH_SCOPE_PATH, DATES_RESOURCE};
use datelog_domain::{
    CreateDateRecord, DateLogError, DateRecord, DeleteConfirmation, RecordId, Result,
    UpdateDateRecord,
};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};
use url::Url;

use super::auth::AccessTokenProvider;
use super::errors::map_status_error;
use crate::http::HttpClient;

/// Configuration for [`DateLogClient`]
#[derive(Debug, Clone)]
pub struct DateLogClientConfig {
    /// Server origin, e.g. `http://127.0.0.1:3001`
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for DateLogClientConfig {
    fn default() -> Self {
        Self { base_url: "http://127.0.0.1:3001".to_string(), timeout: Duration::from_secs(30) }
    }
}

/// Client for the authenticated date record endpoints
pub struct DateLogClient {
    http_client: HttpClient,
    auth: Arc<dyn AccessTokenProvider>,
    base_url: Url,
}

impl DateLogClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns `DateLogError::Config` if the base URL is invalid, or the
    /// HTTP client cannot be built.
    pub fn new(config: DateLogClientConfig, auth: Arc<dyn AccessTokenProvider>) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            DateLogError::Config(format!("Invalid base URL '{}': {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(DateLogError::Config(format!("Base URL '{}' cannot hold paths", base_url)));
        }

        let http_client = HttpClient::builder().timeout(config.timeout).build()?;

        Ok(Self { http_client, auth, base_url })
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> DateLogClientBuilder {
        DateLogClientBuilder::default()
    }

    /// Fetch the caller's records, ordered by date
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<DateRecord>> {
        let request = self.authorized(Method::GET, self.dates_url(None)).await?;
        self.execute(request).await
    }

    /// Create a record
    #[instrument(skip(self, input))]
    pub async fn create(&self, input: &CreateDateRecord) -> Result<DateRecord> {
        let request = self.authorized(Method::POST, self.dates_url(None)).await?.json(input);
        let record: DateRecord = self.execute(request).await?;
        info!(record_id = %record.id, "date record created");
        Ok(record)
    }

    /// Update a record; absent fields are left unchanged
    #[instrument(skip(self, input), fields(record_id = %id))]
    pub async fn update(&self, id: &RecordId, input: &UpdateDateRecord) -> Result<DateRecord> {
        let request = self.authorized(Method::PUT, self.dates_url(Some(id))).await?.json(input);
        self.execute(request).await
    }

    /// Delete a record
    #[instrument(skip(self), fields(record_id = %id))]
    pub async fn delete(&self, id: &RecordId) -> Result<DeleteConfirmation> {
        let request = self.authorized(Method::DELETE, self.dates_url(Some(id))).await?;
        self.execute(request).await
    }

    /// Fetch every record into a fresh [`RecordState`]
    pub async fn load_state(&self) -> Result<RecordState> {
        Ok(RecordState::from_records(self.list().await?))
    }

    /// Check the unauthenticated health probe
    ///
    /// Returns `Ok(false)` for a reachable but unhealthy server.
    pub async fn health_check(&self) -> Result<bool> {
        let url = self.url_with(&[API_BASE_PATH]);
        let response = self.http_client.send(self.http_client.request(Method::GET, url)).await?;
        Ok(response.status().is_success())
    }

    async fn authorized(&self, method: Method, url: Url) -> Result<RequestBuilder> {
        let token = self.auth.access_token().await?;
        Ok(self
            .http_client
            .request(method, url)
            .header(reqwest::header::AUTHORIZATION, token.authorization_value()))
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = self.http_client.send(request).await?;
        let status = response.status();
        debug!(%status, "date log API response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_status_error(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| DateLogError::Internal(format!("Failed to parse response: {}", e)))
    }

    fn dates_url(&self, id: Option<&RecordId>) -> Url {
        let mut segments = vec![API_BASE_PATH, AUTH_SCOPE_PATH, DATES_RESOURCE];
        if let Some(id) = id {
            segments.push(id.as_str());
        }
        self.url_with(&segments)
    }

    // Pieces may carry a leading '/'; each non-empty piece becomes one
    // percent-encoded path segment.
    fn url_with(&self, pieces: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty();
            for piece in pieces {
                path.push(piece.trim_start_matches('/'));
            }
        }
        url
    }
}

/// Builder for [`DateLogClient`]
#[derive(Default)]
pub struct DateLogClientBuilder {
    config: Option<DateLogClientConfig>,
    auth: Option<Arc<dyn AccessTokenProvider>>,
}

impl DateLogClientBuilder {
    pub fn config(mut self, config: DateLogClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut config = self.config.take().unwrap_or_default();
        config.base_url = base_url.into();
        self.config = Some(config);
        self
    }

    pub fn auth(mut self, auth: Arc<dyn AccessTokenProvider>) -> Self {
        self.auth = Some(auth);
        self
    }

    /// # Errors
    ///
    /// Returns `DateLogError::Config` if no token provider was set.
    pub fn build(self) -> Result<DateLogClient> {
        let auth = self
            .auth
            .ok_or_else(|| DateLogError::Config("access token provider is required".into()))?;
        DateLogClient::new(self.config.unwrap_or_default(), auth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::auth::StaticTokenProvider;

    fn client(base: &str) -> DateLogClient {
        DateLogClient::builder()
            .base_url(base)
            .auth(Arc::new(StaticTokenProvider::new("t")))
            .build()
            .unwrap()
    }

    #[test]
    fn builds_resource_urls() {
        let client = client("http://localhost:3001");
        assert_eq!(client.dates_url(None).as_str(), "http://localhost:3001/api/auth/dates");
        assert_eq!(
            client.dates_url(Some(&RecordId::new("abc"))).as_str(),
            "http://localhost:3001/api/auth/dates/abc"
        );
    }

    #[test]
    fn record_ids_are_percent_encoded() {
        let client = client("http://localhost:3001/");
        let url = client.dates_url(Some(&RecordId::new("a/b c")));
        assert_eq!(url.as_str(), "http://localhost:3001/api/auth/dates/a%2Fb%20c");
    }

    #[test]
    fn builder_requires_auth() {
        assert!(matches!(DateLogClient::builder().build(), Err(DateLogError::Config(_))));
    }

    #[test]
    fn rejects_unusable_base_url() {
        let result = DateLogClient::builder()
            .base_url("mailto:someone@example.com")
            .auth(Arc::new(StaticTokenProvider::new("t")))
            .build();
        assert!(matches!(result, Err(DateLogError::Config(_))));
    }
}
