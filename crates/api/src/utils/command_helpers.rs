//! Command execution helpers
//!
//! Times a handler body, logs its outcome once, and converts the domain error
//! into the HTTP error type.

use std::future::Future;
use std::time::Instant;

use datelog_domain::Result as DomainResult;

use crate::errors::ApiError;
use crate::utils::logging::log_command_execution;

/// Execute a command with automatic timing and outcome logging
///
/// # Example
///
/// ```rust,ignore
/// pub async fn list_dates(service: AuthenticatedService) -> Result<Json<Vec<DateRecord>>, ApiError> {
///     execute_logged("dates::list", async { service.list().await }).await.map(Json)
/// }
/// ```
pub async fn execute_logged<Fut, T>(command_name: &str, command: Fut) -> Result<T, ApiError>
where
    Fut: Future<Output = DomainResult<T>>,
{
    let start = Instant::now();
    let result = command.await;

    log_command_execution(command_name, start.elapsed(), result.as_ref().err());

    result.map_err(ApiError::from)
}
