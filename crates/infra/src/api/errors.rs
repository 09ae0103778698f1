//! Mapping of server error responses back to the domain taxonomy

use datelog_domain::DateLogError;
use reqwest::StatusCode;
use serde::Deserialize;

/// `{ "error": "..." }` body returned by the server for every failure.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Turn a non-success response into the matching `DateLogError`.
///
/// The server's message is preserved; an unreadable body falls back to the
/// status line. Unauthorized messages already carry their `Unauthorized:`
/// prefix on the wire, so it is stripped to avoid doubling it.
pub fn map_status_error(status: StatusCode, body: &str) -> DateLogError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|body| body.error)
        .ok()
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| {
            if body.is_empty() {
                format!("server returned status {}", status)
            } else {
                format!("server returned status {}: {}", status, body)
            }
        });

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            let message = message.strip_prefix("Unauthorized: ").map(str::to_string).unwrap_or(message);
            DateLogError::Unauthorized(message)
        }
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            DateLogError::Validation(message)
        }
        StatusCode::NOT_FOUND => DateLogError::NotFound(message),
        status if status.is_server_error() => DateLogError::Storage(message),
        _ => DateLogError::Internal(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_each_status_class() {
        assert_eq!(
            map_status_error(StatusCode::BAD_REQUEST, r#"{"error":"Date is required"}"#),
            DateLogError::Validation("Date is required".into())
        );
        assert_eq!(
            map_status_error(
                StatusCode::NOT_FOUND,
                r#"{"error":"Date record not found or not authorized"}"#
            ),
            DateLogError::NotFound("Date record not found or not authorized".into())
        );
        assert_eq!(
            map_status_error(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error":"boom"}"#),
            DateLogError::Storage("boom".into())
        );
    }

    #[test]
    fn unauthorized_prefix_is_not_doubled() {
        let err = map_status_error(
            StatusCode::UNAUTHORIZED,
            r#"{"error":"Unauthorized: Missing or invalid token format"}"#,
        );
        assert_eq!(err.to_string(), "Unauthorized: Missing or invalid token format");
    }

    #[test]
    fn unreadable_body_falls_back_to_status() {
        let err = map_status_error(StatusCode::BAD_GATEWAY, "<html>");
        assert!(matches!(err, DateLogError::Storage(msg) if msg.contains("502")));
    }
}
