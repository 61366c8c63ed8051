//! HTTP handlers for todo-list operations.
//!
//! - `GET /api/todolists` - List all todo lists
//! - `GET /api/todolists/{id}` - Get a todo list
//! - `POST /api/todolists` - Create a todo list
//! - `PUT /api/todolists/{id}` - Rename a todo list
//! - `DELETE /api/todolists/{id}` - Delete a todo list

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::api::dto::requests::{CreateTodoListRequest, UpdateTodoListRequest};
use crate::api::dto::responses::TodoListResponse;
use crate::api::dto::transformers::{list_to_response, require_non_empty};
use crate::api::middleware::error_handler::ApiErrorResponse;
use crate::infrastructure::AppDependencies;

/// GET /api/todolists - All todo lists, in creation order.
pub async fn index(
    State(dependencies): State<AppDependencies>,
) -> Result<Json<Vec<TodoListResponse>>, ApiErrorResponse> {
    let lists = dependencies.todo_lists().all().await?;
    Ok(Json(lists.iter().map(list_to_response).collect()))
}

/// GET /api/todolists/{id} - One todo list.
///
/// # Response
///
/// - `200 OK` - List found
/// - `404 Not Found` - No list with that id
pub async fn show(
    State(dependencies): State<AppDependencies>,
    Path(todo_list_id): Path<u64>,
) -> Result<Json<TodoListResponse>, ApiErrorResponse> {
    let list = dependencies.todo_lists().get(todo_list_id).await?;
    Ok(Json(list_to_response(&list)))
}

/// POST /api/todolists - Create a todo list.
///
/// # Request Body
///
/// ```json
/// { "name": "Groceries" }
/// ```
///
/// # Response
///
/// - `201 Created` - List created
/// - `400 Bad Request` - Duplicate name (case-insensitive)
/// - `422 Unprocessable Entity` - Missing or empty name
pub async fn create(
    State(dependencies): State<AppDependencies>,
    Json(request): Json<CreateTodoListRequest>,
) -> Result<(StatusCode, Json<TodoListResponse>), ApiErrorResponse> {
    require_non_empty("name", &request.name)?;

    let list = dependencies.todo_lists().create(&request.name).await?;
    Ok((StatusCode::CREATED, Json(list_to_response(&list))))
}

/// PUT /api/todolists/{id} - Rename a todo list, preserving its items.
///
/// # Response
///
/// - `200 OK` - List renamed
/// - `400 Bad Request` - Name collides with a different list
/// - `404 Not Found` - No list with that id
/// - `422 Unprocessable Entity` - Missing or empty name
pub async fn update(
    State(dependencies): State<AppDependencies>,
    Path(todo_list_id): Path<u64>,
    Json(request): Json<UpdateTodoListRequest>,
) -> Result<Json<TodoListResponse>, ApiErrorResponse> {
    require_non_empty("name", &request.name)?;

    let list = dependencies
        .todo_lists()
        .update(todo_list_id, &request.name)
        .await?;
    Ok(Json(list_to_response(&list)))
}

/// DELETE /api/todolists/{id} - Delete a todo list and all of its items.
///
/// # Response
///
/// - `204 No Content` - List deleted
/// - `404 Not Found` - No list with that id
pub async fn destroy(
    State(dependencies): State<AppDependencies>,
    Path(todo_list_id): Path<u64>,
) -> Result<StatusCode, ApiErrorResponse> {
    dependencies.todo_lists().delete(todo_list_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
