//! Todo item entity and its creation/update payloads.

use serde::{Deserialize, Serialize};

/// A single task within a todo list.
///
/// Items are owned exclusively by their parent list and are persisted
/// embedded in the list's JSON document. Item ids are assigned from a
/// per-list monotonic counter and are never reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Identifier unique within the parent list.
    pub id: u64,
    /// Item title, unique case-insensitively within the parent list.
    pub title: String,
    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Completion status.
    #[serde(default)]
    pub completed: bool,
}

impl TodoItem {
    /// Creates an item from a draft with the allocated id.
    #[must_use]
    pub fn new(id: u64, draft: NewTodoItem) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            completed: draft.completed,
        }
    }

    /// Flips the completion status.
    pub const fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Applies a partial update, leaving absent fields unchanged.
    ///
    /// An explicit `Some(None)` for `description` clears it; `None` keeps
    /// the current value.
    pub fn apply(&mut self, patch: TodoItemPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }

    /// Case-insensitive title comparison against a candidate title.
    ///
    /// The candidate is trimmed before comparison; the stored title is not.
    #[must_use]
    pub fn title_conflicts_with(&self, candidate: &str) -> bool {
        self.title.to_lowercase() == candidate.trim().to_lowercase()
    }
}

/// Data for creating a new item (no id assigned yet).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodoItem {
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

impl NewTodoItem {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            completed: false,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// Partial update for an item.
///
/// Each field distinguishes "not provided" (`None`) from "provided".
/// `description` carries one more level so an explicit `null` (clear the
/// description) is distinct from the field being absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoItemPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub completed: Option<bool>,
}
