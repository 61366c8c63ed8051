//! Pure transformations between DTOs and domain types.
//!
//! Field-level validation lives here, before a request reaches the
//! services: empty (or whitespace-only) required strings are rejected with
//! a 422 response.

use crate::domain::{NewTodoItem, TodoItem, TodoItemPatch, TodoList};

use super::requests::{CreateTodoItemRequest, UpdateTodoItemRequest};
use super::responses::{TodoItemResponse, TodoListResponse};
use crate::api::middleware::error_handler::ApiErrorResponse;

/// Rejects empty or whitespace-only values for a required field.
///
/// # Errors
///
/// Returns a 422 `VALIDATION_ERROR` response naming the field.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), ApiErrorResponse> {
    if value.trim().is_empty() {
        return Err(ApiErrorResponse::validation(
            field,
            format!("{field} must not be empty"),
        ));
    }
    Ok(())
}

/// Converts a creation request into a domain draft.
///
/// # Errors
///
/// Returns a 422 response if the title is empty.
pub fn item_draft(request: CreateTodoItemRequest) -> Result<NewTodoItem, ApiErrorResponse> {
    require_non_empty("title", &request.title)?;
    Ok(NewTodoItem {
        title: request.title,
        description: request.description,
        completed: request.completed,
    })
}

/// Converts a partial-update request into a domain patch.
///
/// # Errors
///
/// Returns a 422 response if a provided title is empty.
pub fn item_patch(request: UpdateTodoItemRequest) -> Result<TodoItemPatch, ApiErrorResponse> {
    if let Some(title) = &request.title {
        require_non_empty("title", title)?;
    }
    Ok(TodoItemPatch {
        title: request.title,
        description: request.description,
        completed: request.completed,
    })
}

/// Maps a domain item to its response shape.
#[must_use]
pub fn item_to_response(item: &TodoItem) -> TodoItemResponse {
    TodoItemResponse {
        id: item.id,
        title: item.title.clone(),
        description: item.description.clone(),
        completed: item.completed,
    }
}

/// Maps a domain list (with its items) to its response shape.
#[must_use]
pub fn list_to_response(list: &TodoList) -> TodoListResponse {
    TodoListResponse {
        id: list.id,
        name: list.name.clone(),
        items: list.items.iter().map(item_to_response).collect(),
    }
}
