// src/error/types.rs

use crate::domain::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Transport-level failure with no structured detail available.
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response from the portal, with whatever detail payload it
    /// carried.
    #[error("Portal returned status {status}")]
    Api {
        status: u16,
        detail: Option<ErrorDetail>,
    },

    #[error("Resource not found")]
    NotFound,

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Other error: {0}")]
    Other(String),
}

impl AppError {
    /// The server's human-readable detail message, when the failure carried
    /// a single one (e.g. bad credentials on login).
    pub fn detail_message(&self) -> Option<&str> {
        match self {
            AppError::Api {
                detail: Some(ErrorDetail::Message(msg)),
                ..
            } => Some(msg),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// The `detail` payload of a portal error response: either one message
/// (auth failures, not-found) or an ordered list of per-field violations
/// (validation failures).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Fields(Vec<FieldViolation>),
}

/// One entry of a validation-error list, e.g.
/// `{"loc": ["body", "height"], "msg": "must be positive"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldViolation {
    #[serde(default)]
    pub loc: Vec<serde_json::Value>,
    pub msg: String,
}

impl FieldViolation {
    /// The field component of the location path. The portal reports
    /// `["body", "<field>"]`; fall back to the last string segment when the
    /// path has a different shape.
    pub fn field_name(&self) -> Option<&str> {
        self.loc
            .get(1)
            .and_then(|v| v.as_str())
            .or_else(|| self.loc.iter().rev().find_map(|v| v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detail_parses_single_message() {
        let detail: ErrorDetail =
            serde_json::from_value(json!("Invalid username or password.")).unwrap();
        assert_eq!(
            detail,
            ErrorDetail::Message("Invalid username or password.".to_string())
        );
    }

    #[test]
    fn test_detail_parses_violation_list() {
        let detail: ErrorDetail = serde_json::from_value(json!([
            { "loc": ["body", "height"], "msg": "must be positive", "type": "value_error" },
            { "loc": ["body", "postal_code"], "msg": "invalid format" }
        ]))
        .unwrap();

        match detail {
            ErrorDetail::Fields(violations) => {
                assert_eq!(violations.len(), 2);
                assert_eq!(violations[0].field_name(), Some("height"));
                assert_eq!(violations[0].msg, "must be positive");
            }
            other => panic!("expected field list, got {:?}", other),
        }
    }

    #[test]
    fn test_field_name_falls_back_to_last_string_segment() {
        let violation: FieldViolation =
            serde_json::from_value(json!({ "loc": ["height"], "msg": "m" })).unwrap();
        assert_eq!(violation.field_name(), Some("height"));

        let nested: FieldViolation =
            serde_json::from_value(json!({ "loc": ["body", 0, "city"], "msg": "m" })).unwrap();
        assert_eq!(nested.field_name(), Some("city"));
    }

    #[test]
    fn test_detail_message_accessor() {
        let err = AppError::Api {
            status: 401,
            detail: Some(ErrorDetail::Message("Invalid token.".to_string())),
        };
        assert_eq!(err.detail_message(), Some("Invalid token."));
        assert_eq!(AppError::NotFound.detail_message(), None);
    }
}
