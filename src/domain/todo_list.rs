//! Todo list entity.

use serde::{Deserialize, Serialize};

use super::todo_item::TodoItem;

/// A named, ordered collection of todo items.
///
/// The list is the unit of persistence: it is stored as one JSON document
/// with its items embedded, and every mutation is a whole-document
/// read-modify-write. List ids come from a global monotonic counter and are
/// never reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    /// Globally unique identifier.
    pub id: u64,
    /// List name, unique case-insensitively across all lists.
    pub name: String,
    /// Items in insertion order, owned exclusively by this list.
    #[serde(default)]
    pub items: Vec<TodoItem>,
}

impl TodoList {
    /// Creates an empty list with the allocated id.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Replaces the name, preserving the items.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Looks up an item by id.
    #[must_use]
    pub fn item(&self, item_id: u64) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    /// Looks up an item by id for mutation.
    pub fn item_mut(&mut self, item_id: u64) -> Option<&mut TodoItem> {
        self.items.iter_mut().find(|item| item.id == item_id)
    }

    /// Appends an item to the end of the sequence.
    pub fn push_item(&mut self, item: TodoItem) {
        self.items.push(item);
    }

    /// Removes an item by id, returning whether it was present.
    pub fn remove_item(&mut self, item_id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != item_id);
        self.items.len() < before
    }

    /// Case-insensitive name comparison against a candidate name.
    ///
    /// The candidate is trimmed before comparison; the stored name is not.
    #[must_use]
    pub fn name_conflicts_with(&self, candidate: &str) -> bool {
        self.name.to_lowercase() == candidate.trim().to_lowercase()
    }

    /// Whether a candidate title collides with any item other than
    /// `exclude_item_id`.
    #[must_use]
    pub fn title_taken(&self, candidate: &str, exclude_item_id: Option<u64>) -> bool {
        self.items
            .iter()
            .filter(|item| exclude_item_id != Some(item.id))
            .any(|item| item.title_conflicts_with(candidate))
    }

    /// Marks every incomplete item as completed.
    ///
    /// Returns the number of items that changed state.
    pub fn complete_all_items(&mut self) -> usize {
        let mut completed = 0;
        for item in &mut self.items {
            if !item.completed {
                item.completed = true;
                completed += 1;
            }
        }
        completed
    }
}
