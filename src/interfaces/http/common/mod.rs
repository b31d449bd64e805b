//! Shared HTTP types: response envelope, error mapping, extractors

pub mod validated_json;

pub use validated_json::{ValidatedJson, ValidatedJsonRejection};

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::DomainError;

/// Standard API response envelope
///
/// Every REST endpoint wraps its payload in this envelope.
/// On success: `{"success": true, "data": {...}}`,
/// on failure: `{"success": false, "data": null, "error": "description"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` when the request succeeded
    pub success: bool,
    /// Payload, `null` on failure
    pub data: Option<T>,
    /// Error description, omitted on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ApiResponse<()>>);

/// HTTP status for each domain failure kind
pub fn status_for(err: &DomainError) -> StatusCode {
    match err {
        DomainError::ProductNotFound(_) => StatusCode::NOT_FOUND,
        DomainError::ProductAlreadyExists(_) => StatusCode::CONFLICT,
        DomainError::NegativeQuantity | DomainError::IllegalPrice | DomainError::Validation(_) => {
            StatusCode::BAD_REQUEST
        }
        DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<DomainError> for ApiResponse<()> {
    fn from(err: DomainError) -> Self {
        ApiResponse::error(err.to_string())
    }
}

pub fn api_error(err: DomainError) -> ApiError {
    if err.is_transient() {
        tracing::error!(error = %err, "Storage failure while handling request");
    }
    (status_for(&err), Json(err.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_failure_kind_has_distinct_client_status() {
        assert_eq!(status_for(&DomainError::ProductNotFound(1)), StatusCode::NOT_FOUND);
        assert_eq!(
            status_for(&DomainError::ProductAlreadyExists("x".into())),
            StatusCode::CONFLICT
        );
        assert_eq!(status_for(&DomainError::NegativeQuantity), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(&DomainError::IllegalPrice), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_for(&DomainError::Storage("down".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn envelope_serializes_success_and_error() {
        let ok = serde_json::to_value(ApiResponse::success(3)).unwrap();
        assert_eq!(ok, serde_json::json!({"success": true, "data": 3}));

        let (_, Json(body)) = api_error(DomainError::IllegalPrice);
        let err = serde_json::to_value(body).unwrap();
        assert_eq!(
            err,
            serde_json::json!({
                "success": false,
                "data": null,
                "error": "Illegal product price was given."
            })
        );
    }
}
