//! PostgREST-backed date record store
//!
//! Every handle forwards the caller's own token, so the table's row-level
//! security policy is what scopes reads and writes to the caller. Handles are
//! built per request by [`PostgrestStoreFactory`] and never shared.

use async_trait::async_trait;
use datelog_core::{DateRecordStore, ScopedStoreFactory};
use datelog_domain::constants::DATES_TABLE;
use datelog_domain::{
    BearerToken, DateLogError, DateRecord, DateRecordPatch, NewDateRecord, RecordId, Result,
    Session, UserId,
};
use reqwest::header::{HeaderValue, CONTENT_RANGE};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use super::SupabaseProject;

/// Postgres "invalid text representation", returned when `id` is not a uuid.
const INVALID_TEXT_REPRESENTATION: &str = "22P02";

const PREFER: &str = "Prefer";
const RETURN_REPRESENTATION: &str = "return=representation";
const COUNT_EXACT: &str = "return=minimal,count=exact";

/// Builds one [`PostgrestDateStore`] per session.
#[derive(Clone)]
pub struct PostgrestStoreFactory {
    project: SupabaseProject,
}

impl PostgrestStoreFactory {
    pub fn new(project: SupabaseProject) -> Self {
        Self { project }
    }
}

impl ScopedStoreFactory for PostgrestStoreFactory {
    fn scoped(&self, session: &Session) -> Result<Box<dyn DateRecordStore>> {
        Ok(Box::new(PostgrestDateStore {
            project: self.project.clone(),
            token: session.token.clone(),
            owner: session.user_id().clone(),
            table_url: self.project.table_url(DATES_TABLE),
        }))
    }
}

/// Store handle acting with one caller's credentials.
pub struct PostgrestDateStore {
    project: SupabaseProject,
    token: BearerToken,
    owner: UserId,
    table_url: String,
}

/// Error body returned by PostgREST.
#[derive(Debug, Default, Deserialize)]
struct PostgrestError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    details: Option<String>,
}

/// Outcome of a failed call, before the caller decides what "no match" means.
enum Failure {
    NoSuchRow,
    Error(DateLogError),
}

impl PostgrestDateStore {
    fn request(&self, method: Method) -> RequestBuilder {
        self.project.request(method, &self.table_url, &self.token)
    }

    fn by_id(&self, method: Method, id: &RecordId) -> RequestBuilder {
        self.request(method).query(&[("id", format!("eq.{id}"))])
    }

    async fn execute(&self, request: RequestBuilder) -> std::result::Result<Response, Failure> {
        let response = self.project.http().send(request).await.map_err(Failure::Error)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let error: PostgrestError = serde_json::from_str(&body).unwrap_or_default();

        if error.code.as_deref() == Some(INVALID_TEXT_REPRESENTATION) {
            debug!(owner = %self.owner, "malformed record id treated as no match");
            return Err(Failure::NoSuchRow);
        }

        let message = error
            .message
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| format!("storage returned status {status}"));
        warn!(
            owner = %self.owner,
            %status,
            code = error.code.as_deref().unwrap_or(""),
            details = error.details.as_deref().unwrap_or(""),
            message = %message,
            "storage request failed"
        );
        Err(Failure::Error(DateLogError::Storage(message)))
    }

    async fn rows<T: DeserializeOwned>(response: Response) -> Result<Vec<T>> {
        let bytes = response
            .bytes()
            .await
            .map_err(|err| DateLogError::Storage(format!("failed to read storage response: {err}")))?;
        serde_json::from_slice(&bytes).map_err(|err| {
            DateLogError::Storage(format!("unexpected storage response: {err}"))
        })
    }
}

#[async_trait]
impl DateRecordStore for PostgrestDateStore {
    #[instrument(skip(self), fields(owner = %self.owner))]
    async fn list(&self) -> Result<Vec<DateRecord>> {
        let request = self.request(Method::GET).query(&[("select", "*"), ("order", "date.asc")]);
        match self.execute(request).await {
            Ok(response) => Self::rows(response).await,
            Err(Failure::NoSuchRow) => Ok(Vec::new()),
            Err(Failure::Error(err)) => Err(err),
        }
    }

    #[instrument(skip(self), fields(owner = %self.owner))]
    async fn find(&self, id: &RecordId) -> Result<Option<DateRecord>> {
        let request = self.by_id(Method::GET, id).query(&[("select", "*")]);
        match self.execute(request).await {
            Ok(response) => Ok(Self::rows(response).await?.into_iter().next()),
            Err(Failure::NoSuchRow) => Ok(None),
            Err(Failure::Error(err)) => Err(err),
        }
    }

    #[instrument(skip(self, record), fields(owner = %self.owner))]
    async fn insert(&self, record: NewDateRecord) -> Result<DateRecord> {
        let request = self.request(Method::POST).header(PREFER, RETURN_REPRESENTATION).json(&record);
        let response = match self.execute(request).await {
            Ok(response) => response,
            Err(Failure::NoSuchRow) => {
                return Err(DateLogError::Storage("invalid value in inserted row".into()))
            }
            Err(Failure::Error(err)) => return Err(err),
        };

        Self::rows(response)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DateLogError::Storage("insert returned no row".into()))
    }

    #[instrument(skip(self, patch), fields(owner = %self.owner))]
    async fn update(&self, id: &RecordId, patch: &DateRecordPatch) -> Result<Option<DateRecord>> {
        let request = self.by_id(Method::PATCH, id).header(PREFER, RETURN_REPRESENTATION).json(patch);
        match self.execute(request).await {
            Ok(response) => Ok(Self::rows(response).await?.into_iter().next()),
            Err(Failure::NoSuchRow) => Ok(None),
            Err(Failure::Error(err)) => Err(err),
        }
    }

    #[instrument(skip(self), fields(owner = %self.owner))]
    async fn delete(&self, id: &RecordId) -> Result<u64> {
        let request = self.by_id(Method::DELETE, id).header(PREFER, COUNT_EXACT);
        let response = match self.execute(request).await {
            Ok(response) => response,
            Err(Failure::NoSuchRow) => return Ok(0),
            Err(Failure::Error(err)) => return Err(err),
        };

        response.headers().get(CONTENT_RANGE).and_then(parse_total_count).ok_or_else(|| {
            DateLogError::Storage("storage did not report the deleted row count".into())
        })
    }
}

/// Total from a `Content-Range` value such as `*/1` or `0-0/1`.
fn parse_total_count(value: &HeaderValue) -> Option<u64> {
    let (_, total) = value.to_str().ok()?.rsplit_once('/')?;
    total.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_content_range_totals() {
        assert_eq!(parse_total_count(&HeaderValue::from_static("*/1")), Some(1));
        assert_eq!(parse_total_count(&HeaderValue::from_static("*/0")), Some(0));
        assert_eq!(parse_total_count(&HeaderValue::from_static("0-2/3")), Some(3));
        assert_eq!(parse_total_count(&HeaderValue::from_static("0-2/*")), None);
        assert_eq!(parse_total_count(&HeaderValue::from_static("garbage")), None);
    }
}
