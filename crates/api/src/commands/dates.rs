//! Date record routes under `/api/auth/dates`
//!
//! Bodies are read as raw bytes and parsed here, so a malformed or missing
//! JSON body is a validation error regardless of the request's content type.

use axum::body::Bytes;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use datelog_domain::{
    CreateDateRecord, DateLogError, DateRecord, DeleteConfirmation, RecordId, UpdateDateRecord,
};
use serde::de::DeserializeOwned;

use crate::context::AuthenticatedService;
use crate::errors::ApiError;
use crate::utils::execute_logged;

/// `GET /api/auth/dates`
pub async fn list_dates(service: AuthenticatedService) -> Result<Json<Vec<DateRecord>>, ApiError> {
    execute_logged("dates::list", service.list()).await.map(Json)
}

/// `POST /api/auth/dates`
pub async fn create_date(
    service: AuthenticatedService,
    body: Bytes,
) -> Result<(StatusCode, Json<DateRecord>), ApiError> {
    execute_logged("dates::create", async {
        let input: CreateDateRecord = parse_body(&body)?;
        service.create(input).await
    })
    .await
    .map(|record| (StatusCode::CREATED, Json(record)))
}

/// `PUT /api/auth/dates/{id}`
pub async fn update_date(
    service: AuthenticatedService,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<DateRecord>, ApiError> {
    execute_logged("dates::update", async {
        let input: UpdateDateRecord = parse_body(&body)?;
        service.update(&RecordId::new(id), input).await
    })
    .await
    .map(Json)
}

/// `DELETE /api/auth/dates/{id}`
pub async fn delete_date(
    service: AuthenticatedService,
    Path(id): Path<String>,
) -> Result<Json<DeleteConfirmation>, ApiError> {
    execute_logged("dates::delete", service.delete(&RecordId::new(id))).await.map(Json)
}

fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, DateLogError> {
    serde_json::from_slice(body)
        .map_err(|err| DateLogError::Validation(format!("Invalid JSON body: {err}")))
}
