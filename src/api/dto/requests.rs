//! Request DTOs for the TodoList API.
//!
//! Validation of non-empty fields happens in the transformers before a
//! request reaches the services; structural validation (missing fields,
//! wrong types) is the `Json` extractor's job.

use serde::{Deserialize, Deserializer};

/// Request body for creating a todo list.
///
/// # Example JSON
///
/// ```json
/// { "name": "Groceries" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTodoListRequest {
    /// The list name.
    pub name: String,
}

/// Request body for renaming a todo list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateTodoListRequest {
    /// The new list name.
    pub name: String,
}

/// Request body for creating a todo item.
///
/// # Example JSON
///
/// ```json
/// { "title": "Milk", "description": "2 liters", "completed": false }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTodoItemRequest {
    /// The item title.
    pub title: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Initial completion status.
    #[serde(default)]
    pub completed: bool,
}

/// Request body for partially updating a todo item.
///
/// Absent fields are left unchanged. For `description`, an explicit `null`
/// clears the value — distinct from the field being absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateTodoItemRequest {
    /// New title, if provided.
    #[serde(default)]
    pub title: Option<String>,
    /// New description: absent = keep, `null` = clear, string = replace.
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    /// New completion status, if provided.
    #[serde(default)]
    pub completed: Option<bool>,
}

/// Deserializes a present-but-possibly-null field into `Some(inner)`.
///
/// Combined with `#[serde(default)]`, an absent field stays `None` while an
/// explicit `null` becomes `Some(None)`.
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}
