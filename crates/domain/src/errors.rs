//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Date Logger
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum DateLogError {
    /// Missing, malformed, expired or rejected bearer credential.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// A required field is missing or malformed.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The targeted row does not exist or is not owned by the caller.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The storage collaborator failed for any other reason.
    #[error("Storage failure: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DateLogError {
    /// Message shown to API callers in the `{error}` body.
    ///
    /// Authentication failures keep their `Unauthorized:` prefix; every other
    /// variant exposes the inner message as-is.
    pub fn client_message(&self) -> String {
        match self {
            Self::Unauthorized(_) => self.to_string(),
            Self::Validation(message)
            | Self::NotFound(message)
            | Self::Storage(message)
            | Self::Config(message)
            | Self::Internal(message) => message.clone(),
        }
    }

    /// Stable, low-cardinality label suitable for logging fields.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "unauthorized",
            Self::Validation(_) => "validation",
            Self::NotFound(_) => "not_found",
            Self::Storage(_) => "storage",
            Self::Config(_) => "config",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for Date Logger operations
pub type Result<T> = std::result::Result<T, DateLogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_keeps_prefix_for_clients() {
        let err = DateLogError::Unauthorized("Missing or invalid token format".into());
        assert_eq!(err.client_message(), "Unauthorized: Missing or invalid token format");
    }

    #[test]
    fn other_variants_expose_inner_message() {
        assert_eq!(
            DateLogError::Validation("Date is required".into()).client_message(),
            "Date is required"
        );
        assert_eq!(DateLogError::Storage("connection reset".into()).client_message(), "connection reset");
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_value(DateLogError::NotFound("gone".into())).unwrap();
        assert_eq!(json["type"], "NotFound");
        assert_eq!(json["message"], "gone");
    }
}
