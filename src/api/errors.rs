use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::application::use_cases::{ListError, UploadError};

/// API error response: `{"error": "<message>"}`
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status.as_u16(), error = %self.message, "Request failed");
        }

        let body = Json(json!({
            "error": self.message,
        }));

        (self.status, body).into_response()
    }
}

// Convert use case errors to API errors

impl From<UploadError> for ApiError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::Domain(e) => ApiError::bad_request(e.to_string()),
            UploadError::Storage(e) => ApiError::internal_error(e.to_string()),
        }
    }
}

impl From<ListError> for ApiError {
    fn from(err: ListError) -> Self {
        match err {
            ListError::Storage(e) => ApiError::internal_error(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::StorageError;
    use crate::domain::errors::DomainError;

    #[test]
    fn test_validation_errors_map_to_bad_request() {
        let err: ApiError = UploadError::Domain(DomainError::EmptyFilename).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "No file selected");
    }

    #[test]
    fn test_every_domain_error_is_a_client_error() {
        let errors = [
            DomainError::EmptyFilename,
            DomainError::InvalidExtension {
                filename: "notes.txt".to_string(),
            },
            DomainError::FileTooLarge {
                size: 200 * 1024 * 1024,
                max: 100 * 1024 * 1024,
            },
        ];

        for domain_error in errors {
            let err: ApiError = UploadError::Domain(domain_error).into();
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_storage_errors_map_to_internal_error() {
        let err: ApiError =
            UploadError::Storage(StorageError::Backend("connection reset".to_string())).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.message().contains("connection reset"));

        let err: ApiError =
            ListError::Storage(StorageError::PermissionDenied("bucket".to_string())).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let response = ApiError::bad_request("No file provided").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, json!({ "error": "No file provided" }));
    }
}
