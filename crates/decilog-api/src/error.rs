//! HTTP error mapping
//!
//! Translates the domain error taxonomy into status codes and the wire error
//! body `{message, errors}`. Validation failures carry the full per-field
//! violation list; persistence faults are logged and surfaced opaquely.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use decilog_core::DecilogError;
use serde::Serialize;
use tracing::error;

/// Result alias for HTTP handlers
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Domain error carried to the response layer
#[derive(Debug)]
pub struct ApiError(DecilogError);

impl From<DecilogError> for ApiError {
    fn from(err: DecilogError) -> Self {
        Self(err)
    }
}

/// Wire error body: `errors` is present only for validation failures
#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match &self.0 {
            DecilogError::ValidationFailed { .. } => (
                StatusCode::BAD_REQUEST,
                "Validation failed".to_string(),
                self.0.violation_messages(),
            ),
            DecilogError::DecisionNotFound { .. }
            | DecilogError::GoalNotFound { .. }
            | DecilogError::ProjectNotFound { .. } => {
                (StatusCode::NOT_FOUND, self.0.to_string(), Vec::new())
            }
            DecilogError::InvalidIdentifier { .. } => {
                (StatusCode::BAD_REQUEST, self.0.to_string(), Vec::new())
            }
            DecilogError::Persistence { message } => {
                error!(%message, "persistence failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    Vec::new(),
                )
            }
        };

        (status, Json(ErrorBody { message, errors })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400_with_errors() {
        let err = ApiError::from(DecilogError::validation(vec![
            decilog_core::Violation::RequiredFieldMissing { field: "title" },
        ]));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ApiError::from(DecilogError::DecisionNotFound {
            id: "d1".to_string(),
        });
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_persistence_is_opaque_500() {
        let err = ApiError::from(DecilogError::Persistence {
            message: "disk full".to_string(),
        });
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
