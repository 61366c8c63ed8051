//! Service error taxonomy.
//!
//! Services raise typed failures; the API layer maps each variant to an
//! HTTP status. Failures are never silently swallowed except inside the
//! worker's job-execution boundary, where they are recorded on the job.

use thiserror::Error;

use crate::infrastructure::store::StoreError;

/// Error types for the todo-list and todo-item services.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// No list exists with the given id.
    #[error("TodoList with id {0} not found")]
    ListNotFound(u64),

    /// The list exists but contains no item with the given id.
    #[error("Item with id {item_id} not found in TodoList {todo_list_id}")]
    ItemNotFound {
        /// The parent list id.
        todo_list_id: u64,
        /// The missing item id.
        item_id: u64,
    },

    /// Another list already uses this name (case-insensitive).
    #[error("A list with the name '{name}' already exists")]
    DuplicateName {
        /// The conflicting name as submitted.
        name: String,
    },

    /// Another item in the same list already uses this title
    /// (case-insensitive).
    #[error("A task with title '{title}' already exists in this list")]
    DuplicateTitle {
        /// The conflicting title as submitted.
        title: String,
    },

    /// The backing store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    /// Creates a new `ItemNotFound` error.
    #[must_use]
    pub const fn item_not_found(todo_list_id: u64, item_id: u64) -> Self {
        Self::ItemNotFound {
            todo_list_id,
            item_id,
        }
    }

    /// Creates a new `DuplicateName` error.
    #[must_use]
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    /// Creates a new `DuplicateTitle` error.
    #[must_use]
    pub fn duplicate_title(title: impl Into<String>) -> Self {
        Self::DuplicateTitle {
            title: title.into(),
        }
    }

    /// Returns `true` if this is a not-found error (list or item).
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::ListNotFound(_) | Self::ItemNotFound { .. })
    }

    /// Returns `true` if this is a uniqueness conflict (name or title).
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::DuplicateName { .. } | Self::DuplicateTitle { .. })
    }
}
