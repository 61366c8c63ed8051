//! HTTP handlers for todo-item operations.
//!
//! All paths are scoped under a parent list; the services resolve the list
//! first and fail with 404 when it is absent. The bulk completion endpoint
//! is the one asynchronous operation: it enqueues a job and returns 202
//! immediately.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::api::dto::requests::{CreateTodoItemRequest, UpdateTodoItemRequest};
use crate::api::dto::responses::{EnqueuedJobResponse, TodoItemResponse};
use crate::api::dto::transformers::{item_draft, item_patch, item_to_response};
use crate::api::middleware::error_handler::ApiErrorResponse;
use crate::infrastructure::AppDependencies;
use crate::infrastructure::jobs::JobCommand;

/// GET /api/todolists/{id}/items - All items of a list, in insertion order.
pub async fn index(
    State(dependencies): State<AppDependencies>,
    Path(todo_list_id): Path<u64>,
) -> Result<Json<Vec<TodoItemResponse>>, ApiErrorResponse> {
    let items = dependencies.todo_items().all(todo_list_id).await?;
    Ok(Json(items.iter().map(item_to_response).collect()))
}

/// GET /api/todolists/{id}/items/{item_id} - One item.
pub async fn show(
    State(dependencies): State<AppDependencies>,
    Path((todo_list_id, item_id)): Path<(u64, u64)>,
) -> Result<Json<TodoItemResponse>, ApiErrorResponse> {
    let item = dependencies.todo_items().get(todo_list_id, item_id).await?;
    Ok(Json(item_to_response(&item)))
}

/// POST /api/todolists/{id}/items - Create an item in a list.
///
/// # Request Body
///
/// ```json
/// { "title": "Milk", "description": "2 liters", "completed": false }
/// ```
///
/// # Response
///
/// - `201 Created` - Item created
/// - `400 Bad Request` - Duplicate title within the list (case-insensitive)
/// - `404 Not Found` - No list with that id
/// - `422 Unprocessable Entity` - Missing or empty title
pub async fn create(
    State(dependencies): State<AppDependencies>,
    Path(todo_list_id): Path<u64>,
    Json(request): Json<CreateTodoItemRequest>,
) -> Result<(StatusCode, Json<TodoItemResponse>), ApiErrorResponse> {
    let draft = item_draft(request)?;

    let item = dependencies.todo_items().create(todo_list_id, draft).await?;
    Ok((StatusCode::CREATED, Json(item_to_response(&item))))
}

/// PUT /api/todolists/{id}/items/{item_id} - Partially update an item.
///
/// Absent fields are left unchanged; an explicit `null` description clears
/// it.
///
/// # Response
///
/// - `200 OK` - Item updated
/// - `400 Bad Request` - Title collides with a different item
/// - `404 Not Found` - List or item absent
/// - `422 Unprocessable Entity` - Provided title is empty
pub async fn update(
    State(dependencies): State<AppDependencies>,
    Path((todo_list_id, item_id)): Path<(u64, u64)>,
    Json(request): Json<UpdateTodoItemRequest>,
) -> Result<Json<TodoItemResponse>, ApiErrorResponse> {
    let patch = item_patch(request)?;

    let item = dependencies
        .todo_items()
        .update(todo_list_id, item_id, patch)
        .await?;
    Ok(Json(item_to_response(&item)))
}

/// PATCH /api/todolists/{id}/items/{item_id}/toggle - Flip completion.
///
/// # Response
///
/// - `200 OK` - Item toggled
/// - `404 Not Found` - List or item absent
pub async fn toggle(
    State(dependencies): State<AppDependencies>,
    Path((todo_list_id, item_id)): Path<(u64, u64)>,
) -> Result<Json<TodoItemResponse>, ApiErrorResponse> {
    let item = dependencies
        .todo_items()
        .toggle(todo_list_id, item_id)
        .await?;
    Ok(Json(item_to_response(&item)))
}

/// DELETE /api/todolists/{id}/items/{item_id} - Delete an item.
///
/// # Response
///
/// - `204 No Content` - Item deleted
/// - `404 Not Found` - List or item absent
pub async fn destroy(
    State(dependencies): State<AppDependencies>,
    Path((todo_list_id, item_id)): Path<(u64, u64)>,
) -> Result<StatusCode, ApiErrorResponse> {
    dependencies
        .todo_items()
        .delete(todo_list_id, item_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/todolists/{id}/items/complete-all - Queue bulk completion.
///
/// Enqueues the job and responds immediately; the list is not resolved
/// here, so a job against a missing list is accepted and later ends
/// `failed`. Poll the `check_status` path for the outcome.
///
/// # Response
///
/// - `202 Accepted` - Job enqueued
pub async fn complete_all(
    State(dependencies): State<AppDependencies>,
    Path(todo_list_id): Path<u64>,
) -> Result<(StatusCode, Json<EnqueuedJobResponse>), ApiErrorResponse> {
    let job_id = dependencies
        .job_queue()
        .enqueue(JobCommand::CompleteAll { todo_list_id })
        .await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(EnqueuedJobResponse {
            message: "queued job".to_string(),
            job_id: job_id.to_string(),
            todo_list_id,
            check_status: format!("/api/jobs/{job_id}"),
        }),
    ))
}
