//! Error types for the case-core crate

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Result type alias for case-core operations
pub type Result<T> = std::result::Result<T, CaseError>;

/// Main error type for case-core
#[derive(Debug, thiserror::Error)]
pub enum CaseError {
    #[error("Invalid case input: {reason}")]
    InvalidCaseInput { reason: String },

    #[error("Evidence submitted without a case reference")]
    MissingCaseReference,

    #[error("File type is not allowed: {extension:?}")]
    UnsupportedFileType { extension: String },

    #[error("Upload exceeds the size limit of {limit_bytes} bytes")]
    PayloadTooLarge { limit_bytes: u64 },

    #[error("Unusable filename: {name:?}")]
    InvalidFilename { name: String },

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("Invalid request: {reason}")]
    InvalidRequest { reason: String },

    #[error("JSON serialization/deserialization error")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for CaseError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            CaseError::InvalidCaseInput { ref reason } => {
                tracing::debug!(reason = %reason, "rejected case input");
                (
                    StatusCode::BAD_REQUEST,
                    "invalid_case_input",
                    "Case title and date are required",
                )
            }
            CaseError::MissingCaseReference => (
                StatusCode::BAD_REQUEST,
                "missing_case_reference",
                "Evidence must reference a case: create one in the same submission or supply case_id",
            ),
            CaseError::UnsupportedFileType { .. } => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "unsupported_file_type",
                "File extension is not on the evidence allow-list",
            ),
            CaseError::PayloadTooLarge { .. } => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "payload_too_large",
                "Uploaded file exceeds the configured size limit",
            ),
            CaseError::InvalidFilename { .. } => (
                StatusCode::BAD_REQUEST,
                "invalid_filename",
                "Filename could not be reduced to a safe name",
            ),
            CaseError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, "not_found", "Requested resource was not found")
            }
            CaseError::InvalidRequest { .. } => (
                StatusCode::BAD_REQUEST,
                "invalid_request",
                "Request could not be processed",
            ),
            CaseError::Json(_) => (
                StatusCode::BAD_REQUEST,
                "invalid_request",
                "Invalid JSON in request body",
            ),
            CaseError::Io(ref err) => {
                tracing::error!(error = %err, "storage IO failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "server_error", "Internal I/O error")
            }
            CaseError::Internal(ref msg) => {
                tracing::error!(context = %msg, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "server_error",
                    "Internal server error",
                )
            }
        };

        let body = json!({
            "error": error_code,
            "error_description": message
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_file_type_maps_to_415() {
        let response =
            CaseError::UnsupportedFileType { extension: "exe".into() }.into_response();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[test]
    fn payload_too_large_maps_to_413() {
        let response = CaseError::PayloadTooLarge { limit_bytes: 1024 }.into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn not_found_maps_to_404() {
        let response = CaseError::NotFound { resource: "file".into() }.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn missing_case_reference_maps_to_400() {
        let response = CaseError::MissingCaseReference.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
