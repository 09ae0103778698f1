//! Router assembly and the serve loop

use std::future::Future;
use std::sync::Arc;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use datelog_domain::constants::{API_BASE_PATH, AUTH_SCOPE_PATH, DATES_RESOURCE};
use datelog_domain::{DateLogError, Result, ServerConfig};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};

use crate::commands::{create_date, delete_date, health, list_dates, update_date};
use crate::context::AppContext;

/// Build the full HTTP surface.
///
/// ```text
/// GET    /api                    health probe
/// GET    /api/auth/dates         list
/// POST   /api/auth/dates         create
/// PUT    /api/auth/dates/{id}    update
/// DELETE /api/auth/dates/{id}    delete
/// ```
pub fn build_router(ctx: Arc<AppContext>) -> Router {
    let dates = format!("{API_BASE_PATH}{AUTH_SCOPE_PATH}{DATES_RESOURCE}");
    let date = format!("{dates}/{{id}}");
    let cors = cors_layer(&ctx.config.server);

    Router::new()
        .route(API_BASE_PATH, get(health))
        .route(&dates, get(list_dates).post(create_date))
        .route(&date, axum::routing::put(update_date).delete(delete_date))
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(cors)
        .with_state(ctx)
}

/// CORS policy for browser callers.
///
/// Preflights are answered by the layer itself and never reach the
/// authentication gate.
pub fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins = if server.allows_any_origin() {
        AllowOrigin::any()
    } else {
        let values: Vec<HeaderValue> = server
            .allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(err) => {
                    warn!(%origin, error = %err, "ignoring unusable CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(values)
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
}

async fn route_not_found() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not Found" })))
}

async fn method_not_allowed() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::METHOD_NOT_ALLOWED, Json(json!({ "error": "Method Not Allowed" })))
}

/// Bind the configured address.
pub async fn bind(ctx: &AppContext) -> Result<TcpListener> {
    let address = &ctx.config.server.bind_address;
    TcpListener::bind(address)
        .await
        .map_err(|err| DateLogError::Config(format!("failed to bind {address}: {err}")))
}

/// Serve until `shutdown` resolves, then drain in-flight requests.
pub async fn serve<F>(ctx: Arc<AppContext>, listener: TcpListener, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener
        .local_addr()
        .map_err(|err| DateLogError::Internal(format!("listener has no local address: {err}")))?;
    info!(%local_addr, "date log server listening");

    axum::serve(listener, build_router(ctx))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|err| DateLogError::Internal(format!("server error: {err}")))?;

    info!("date log server stopped");
    Ok(())
}
