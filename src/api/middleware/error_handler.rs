//! Error handling for the API layer.
//!
//! Service and queue failures are mapped to HTTP responses with a stable
//! JSON error body.
//!
//! # Example JSON
//!
//! ```json
//! {
//!     "code": "LIST_NOT_FOUND",
//!     "message": "TodoList with id 42 not found",
//!     "details": { "todo_list_id": 42 }
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ServiceError;
use crate::infrastructure::jobs::QueueError;
use crate::infrastructure::store::StoreError;

/// API error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiError {
    /// A machine-readable error code.
    pub code: String,
    /// A human-readable error message.
    pub message: String,
    /// Optional additional error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Creates a new `ApiError` without details.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new `ApiError` with details.
    #[must_use]
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

/// Response wrapper that pairs an HTTP status code with an [`ApiError`].
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a new `ApiErrorResponse`.
    #[must_use]
    pub const fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }

    /// Creates a 422 validation error for an empty or missing field.
    #[must_use]
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::with_details(
                "VALIDATION_ERROR",
                message,
                serde_json::json!({ "field": field }),
            ),
        )
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

/// Converts a service error to an HTTP status and API error body.
///
/// # Error Mapping
///
/// | Service Error | HTTP Status | Error Code |
/// |---------------|-------------|------------|
/// | `ListNotFound` | 404 | `LIST_NOT_FOUND` |
/// | `ItemNotFound` | 404 | `ITEM_NOT_FOUND` |
/// | `DuplicateName` | 400 | `DUPLICATE_NAME` |
/// | `DuplicateTitle` | 400 | `DUPLICATE_TITLE` |
/// | `Store(Unavailable)` | 503 | `STORE_UNAVAILABLE` |
/// | `Store(Serialization)` | 500 | `SERIALIZATION_ERROR` |
#[must_use]
pub fn service_error_to_api_error(error: ServiceError) -> (StatusCode, ApiError) {
    let message = error.to_string();
    match error {
        ServiceError::ListNotFound(todo_list_id) => (
            StatusCode::NOT_FOUND,
            ApiError::with_details(
                "LIST_NOT_FOUND",
                message,
                serde_json::json!({ "todo_list_id": todo_list_id }),
            ),
        ),
        ServiceError::ItemNotFound {
            todo_list_id,
            item_id,
        } => (
            StatusCode::NOT_FOUND,
            ApiError::with_details(
                "ITEM_NOT_FOUND",
                message,
                serde_json::json!({ "todo_list_id": todo_list_id, "item_id": item_id }),
            ),
        ),
        ServiceError::DuplicateName { name } => (
            StatusCode::BAD_REQUEST,
            ApiError::with_details(
                "DUPLICATE_NAME",
                message,
                serde_json::json!({ "name": name }),
            ),
        ),
        ServiceError::DuplicateTitle { title } => (
            StatusCode::BAD_REQUEST,
            ApiError::with_details(
                "DUPLICATE_TITLE",
                message,
                serde_json::json!({ "title": title }),
            ),
        ),
        ServiceError::Store(store_error) => store_error_to_api_error(&store_error),
    }
}

fn store_error_to_api_error(error: &StoreError) -> (StatusCode, ApiError) {
    match error {
        StoreError::Unavailable { .. } => (
            StatusCode::SERVICE_UNAVAILABLE,
            ApiError::new("STORE_UNAVAILABLE", error.to_string()),
        ),
        StoreError::Serialization { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::new("SERIALIZATION_ERROR", error.to_string()),
        ),
    }
}

/// Converts a queue error to an HTTP status and API error body.
///
/// # Error Mapping
///
/// | Queue Error | HTTP Status | Error Code |
/// |-------------|-------------|------------|
/// | `JobNotFound` | 404 | `JOB_NOT_FOUND` |
/// | `Unavailable` | 503 | `QUEUE_UNAVAILABLE` |
/// | `Serialization` | 500 | `SERIALIZATION_ERROR` |
#[must_use]
pub fn queue_error_to_api_error(error: QueueError) -> (StatusCode, ApiError) {
    let message = error.to_string();
    match error {
        QueueError::JobNotFound(job_id) => (
            StatusCode::NOT_FOUND,
            ApiError::with_details(
                "JOB_NOT_FOUND",
                message,
                serde_json::json!({ "job_id": job_id.as_str() }),
            ),
        ),
        QueueError::Unavailable { .. } => (
            StatusCode::SERVICE_UNAVAILABLE,
            ApiError::new("QUEUE_UNAVAILABLE", message),
        ),
        QueueError::Serialization { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::new("SERIALIZATION_ERROR", message),
        ),
    }
}

impl From<ServiceError> for ApiErrorResponse {
    fn from(error: ServiceError) -> Self {
        let (status, api_error) = service_error_to_api_error(error);
        Self::new(status, api_error)
    }
}

impl From<QueueError> for ApiErrorResponse {
    fn from(error: QueueError) -> Self {
        let (status, api_error) = queue_error_to_api_error(error);
        Self::new(status, api_error)
    }
}
