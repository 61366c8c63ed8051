//! Response DTOs for the TodoList API.

use serde::Serialize;

use crate::infrastructure::jobs::JobStatus;

/// A todo item as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoItemResponse {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

/// A todo list with its embedded items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoListResponse {
    pub id: u64,
    pub name: String,
    pub items: Vec<TodoItemResponse>,
}

/// Response for an accepted bulk-completion request.
///
/// # Example JSON
///
/// ```json
/// {
///     "message": "queued job",
///     "job_id": "4b4a...",
///     "todo_list_id": 1,
///     "check_status": "/api/jobs/4b4a..."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnqueuedJobResponse {
    pub message: String,
    pub job_id: String,
    pub todo_list_id: u64,
    pub check_status: String,
}

/// A job's status snapshot.
///
/// `result` and `error` are always present in the body (as `null` until the
/// job reaches the corresponding terminal state).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobResponse {
    pub id: String,
    pub status: JobStatus,
    pub result: Option<serde_json::Value>,
    pub error: Option<String>,
}

/// Health check response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    /// Service status ("healthy" or "unhealthy").
    pub status: String,
    /// Service version.
    pub version: String,
}
