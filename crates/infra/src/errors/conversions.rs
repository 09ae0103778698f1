//! Conversions from external infrastructure errors into domain errors.

use datelog_domain::DateLogError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub DateLogError);

impl From<InfraError> for DateLogError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<DateLogError> for InfraError {
    fn from(value: DateLogError) -> Self {
        InfraError(value)
    }
}

trait IntoDateLogError {
    fn into_datelog(self) -> DateLogError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → DateLogError */
/* -------------------------------------------------------------------------- */

impl IntoDateLogError for HttpError {
    fn into_datelog(self) -> DateLogError {
        if self.is_timeout() {
            return DateLogError::Storage("HTTP request timed out".into());
        }

        if self.is_connect() {
            return DateLogError::Storage("HTTP connection failure".into());
        }

        if self.is_builder() {
            return DateLogError::Internal(format!("invalid HTTP request: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 | 403 => DateLogError::Unauthorized(message),
                404 => DateLogError::NotFound(message),
                _ => DateLogError::Storage(message),
            };
        }

        if self.is_decode() {
            return DateLogError::Storage(format!("unexpected response body: {self}"));
        }

        DateLogError::Storage(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_datelog())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → DateLogError */
/* -------------------------------------------------------------------------- */

impl IntoDateLogError for JsonError {
    fn into_datelog(self) -> DateLogError {
        DateLogError::Storage(format!("malformed JSON from collaborator: {self}"))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_datelog())
    }
}

#[cfg(test)]
mod tests {
    use reqwest::{Client, StatusCode};
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    async fn status_error(status: StatusCode) -> HttpError {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let client = Client::builder().no_proxy().build().unwrap();
        client.get(server.uri()).send().await.unwrap().error_for_status().unwrap_err()
    }

    #[tokio::test]
    async fn http_status_401_maps_to_unauthorized() {
        let mapped: DateLogError = InfraError::from(status_error(StatusCode::UNAUTHORIZED).await).into();
        match mapped {
            DateLogError::Unauthorized(msg) => assert!(msg.contains("401")),
            other => panic!("expected unauthorized, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn http_status_503_maps_to_storage_failure() {
        let mapped: DateLogError =
            InfraError::from(status_error(StatusCode::SERVICE_UNAVAILABLE).await).into();
        assert!(matches!(mapped, DateLogError::Storage(msg) if msg.contains("503")));
    }

    #[tokio::test]
    async fn refused_connection_maps_to_storage_failure() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = Client::builder().no_proxy().build().unwrap();
        let error = client.get(format!("http://{addr}")).send().await.unwrap_err();

        let mapped: DateLogError = InfraError::from(error).into();
        assert_eq!(mapped, DateLogError::Storage("HTTP connection failure".into()));
    }

    #[test]
    fn malformed_json_maps_to_storage_failure() {
        let error = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let mapped: DateLogError = InfraError::from(error).into();
        assert!(matches!(mapped, DateLogError::Storage(_)));
    }
}
