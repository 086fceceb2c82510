//! HTTP error type and the storage-to-status mapping.
//!
//! Every failure leaves the server as `{"error": "<message>"}` with the
//! appropriate status. Internal details (SQLite messages, pool state) are
//! logged but never sent to the client.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use lowespro_core::{StorageError, ValidationError};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Payload failed field validation (400).
    #[error("{0}")]
    Validation(String),
    /// Malformed request: bad JSON, wrong content type (400).
    #[error("{0}")]
    BadRequest(String),
    /// Row does not exist (404).
    #[error("{0}")]
    NotFound(String),
    /// Request conflicts with existing data (409).
    #[error("{0}")]
    Conflict(String),
    /// Anything the client cannot fix (500).
    #[error("Internal server error")]
    Internal,
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::NotFound { .. } => Self::NotFound(e.to_string()),
            StorageError::DuplicateName { .. } | StorageError::CategoryHasChildren { .. } => {
                Self::Conflict(e.to_string())
            }
            StorageError::InvalidReference { .. } | StorageError::SelfReference { .. } => {
                Self::BadRequest(e.to_string())
            }
            StorageError::Sqlite { .. }
            | StorageError::MigrationFailed { .. }
            | StorageError::Pool { .. } => {
                tracing::error!(error = %e, "storage failure");
                Self::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let err: ApiError = StorageError::NotFound { resource: "Vendor" }.into();
        match err {
            ApiError::NotFound(msg) => assert_eq!(msg, "Vendor not found"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_conflicts_map_to_409() {
        let dup: ApiError = StorageError::DuplicateName {
            resource: "Trade",
            name: "Welder".to_string(),
        }
        .into();
        assert!(matches!(dup, ApiError::Conflict(_)));

        let children: ApiError = StorageError::CategoryHasChildren { children: 3 }.into();
        assert!(matches!(children, ApiError::Conflict(_)));
    }

    #[test]
    fn test_reference_errors_map_to_400() {
        let bad_ref: ApiError =
            StorageError::InvalidReference { field: "vendorId", resource: "Vendor" }.into();
        assert!(matches!(bad_ref, ApiError::BadRequest(_)));

        let self_ref: ApiError = StorageError::SelfReference { field: "parentId" }.into();
        match self_ref {
            ApiError::BadRequest(msg) => {
                assert_eq!(msg, "parentId must not reference the record itself")
            }
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let err: ApiError = StorageError::Sqlite { message: "disk I/O error".to_string() }.into();
        assert!(matches!(err, ApiError::Internal));
    }
}
