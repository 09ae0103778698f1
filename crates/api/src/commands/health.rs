//! Unauthenticated liveness probe

/// `GET /api`
pub async fn health() -> &'static str {
    "ok"
}
