//! API error type and JSON error body shared by all routes.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::assessment::AssessmentError;
use crate::domain::foundation::ErrorCode;

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl ToString, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound { code: ErrorCode, message: String },
    Conflict { code: ErrorCode, message: String },
    ServiceUnavailable(String),
    Internal(String),
}

impl ApiError {
    pub fn invalid_id(kind: &str, raw: &str) -> Self {
        ApiError::BadRequest(format!("Invalid {} ID format: '{}'", kind, raw))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AssessmentError> for ApiError {
    fn from(err: AssessmentError) -> Self {
        let code = err.code();
        let message = err.to_string();
        match err {
            AssessmentError::NotFound(_)
            | AssessmentError::ApplicationNotFound(_)
            | AssessmentError::QuestionNotFound(_)
            | AssessmentError::OptionNotFound { .. }
            | AssessmentError::ReportNotFound(_) => ApiError::NotFound { code, message },
            AssessmentError::AlreadyCompleted(_) => ApiError::Conflict { code, message },
            AssessmentError::ValidationFailed { .. } => ApiError::BadRequest(message),
            AssessmentError::StorageUnavailable(_) => ApiError::ServiceUnavailable(message),
            AssessmentError::Infrastructure(_) => ApiError::Internal(message),
        }
    }
}

/// Malformed or incomplete request bodies answer 400 with the JSON error body.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::BadRequest(msg) => ErrorResponse::bad_request(msg),
            ApiError::NotFound { code, message } | ApiError::Conflict { code, message } => {
                ErrorResponse::new(code, message)
            }
            ApiError::ServiceUnavailable(msg) => {
                tracing::error!(error = %msg, "Storage unavailable");
                ErrorResponse::new(ErrorCode::StorageUnavailable, msg)
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                ErrorResponse::internal(msg)
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{AssessmentId, QuestionId};

    #[test]
    fn not_found_kinds_map_to_404() {
        let err: ApiError = AssessmentError::QuestionNotFound(QuestionId::new("q9").unwrap()).into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let err: ApiError = AssessmentError::ReportNotFound(AssessmentId::new()).into();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn completed_maps_to_conflict() {
        let err: ApiError = AssessmentError::AlreadyCompleted(AssessmentId::new()).into();
        assert_eq!(err.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn storage_maps_to_service_unavailable() {
        let err: ApiError = AssessmentError::StorageUnavailable("disk".to_string()).into();
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn validation_maps_to_bad_request() {
        let err: ApiError = AssessmentError::validation("name", "blank").into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn error_body_uses_domain_code() {
        let body = ErrorResponse::new(ErrorCode::ReportNotFound, "missing");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["code"], "REPORT_NOT_FOUND");
        assert_eq!(json["message"], "missing");
    }
}
