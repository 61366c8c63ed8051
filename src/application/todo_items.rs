//! TodoItem service: CRUD, toggle and bulk completion scoped per parent
//! list.
//!
//! Every operation resolves the parent list first; items never outlive
//! their list. Item ids come from a per-list counter
//! (`todoitem:{list_id}:next_id`), and every mutation persists the whole
//! parent document through the list service.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::{NewTodoItem, TodoItem, TodoItemPatch, TodoList};
use crate::infrastructure::store::KeyValueStore;

use super::errors::ServiceError;
use super::todo_lists::TodoListService;

/// Outcome of a bulk completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompleteAllOutcome {
    /// How many items changed from incomplete to completed.
    pub completed: usize,
    /// Human-readable summary.
    pub message: String,
}

/// Service for managing todo items within their parent lists.
#[derive(Clone)]
pub struct TodoItemService {
    lists: TodoListService,
    store: Arc<dyn KeyValueStore>,
}

impl TodoItemService {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            lists: TodoListService::new(Arc::clone(&store)),
            store,
        }
    }

    fn item_counter_key(todo_list_id: u64) -> String {
        format!("todoitem:{todo_list_id}:next_id")
    }

    /// All items of a list, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::ListNotFound` if the list is absent.
    pub async fn all(&self, todo_list_id: u64) -> Result<Vec<TodoItem>, ServiceError> {
        Ok(self.lists.get(todo_list_id).await?.items)
    }

    /// Looks up one item within a list.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::ListNotFound` if the list is absent and
    /// `ServiceError::ItemNotFound` if the item is absent within it.
    pub async fn get(&self, todo_list_id: u64, item_id: u64) -> Result<TodoItem, ServiceError> {
        let list = self.lists.get(todo_list_id).await?;
        list.item(item_id)
            .cloned()
            .ok_or(ServiceError::item_not_found(todo_list_id, item_id))
    }

    /// Creates a new item at the end of the list's sequence.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::ListNotFound` if the list is absent and
    /// `ServiceError::DuplicateTitle` if another item in the list already
    /// uses the title (case-insensitive).
    pub async fn create(
        &self,
        todo_list_id: u64,
        draft: NewTodoItem,
    ) -> Result<TodoItem, ServiceError> {
        let mut list = self.lists.get(todo_list_id).await?;

        if list.title_taken(&draft.title, None) {
            return Err(ServiceError::duplicate_title(draft.title));
        }

        let item_id = self
            .store
            .next_id(&Self::item_counter_key(todo_list_id))
            .await?;
        let item = TodoItem::new(item_id, draft);
        list.push_item(item.clone());
        self.lists.save(&list).await?;
        Ok(item)
    }

    /// Applies a partial update to an item.
    ///
    /// Only fields present in the patch change; an explicit `null`
    /// description clears it.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::ListNotFound` / `ServiceError::ItemNotFound`
    /// for unresolvable ids and `ServiceError::DuplicateTitle` if the new
    /// title collides with a *different* item in the list.
    pub async fn update(
        &self,
        todo_list_id: u64,
        item_id: u64,
        patch: TodoItemPatch,
    ) -> Result<TodoItem, ServiceError> {
        let mut list = self.lists.get(todo_list_id).await?;

        if let Some(title) = &patch.title {
            if list.title_taken(title, Some(item_id)) {
                return Err(ServiceError::duplicate_title(title.clone()));
            }
        }

        let updated = Self::mutate_item(&mut list, todo_list_id, item_id, |item| {
            item.apply(patch);
        })?;
        self.lists.save(&list).await?;
        Ok(updated)
    }

    /// Flips an item's completion status.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::ListNotFound` / `ServiceError::ItemNotFound`
    /// for unresolvable ids.
    pub async fn toggle(&self, todo_list_id: u64, item_id: u64) -> Result<TodoItem, ServiceError> {
        let mut list = self.lists.get(todo_list_id).await?;
        let updated = Self::mutate_item(&mut list, todo_list_id, item_id, TodoItem::toggle)?;
        self.lists.save(&list).await?;
        Ok(updated)
    }

    /// Removes an item from the list's sequence.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::ListNotFound` / `ServiceError::ItemNotFound`
    /// for unresolvable ids.
    pub async fn delete(&self, todo_list_id: u64, item_id: u64) -> Result<(), ServiceError> {
        let mut list = self.lists.get(todo_list_id).await?;

        if !list.remove_item(item_id) {
            return Err(ServiceError::item_not_found(todo_list_id, item_id));
        }
        self.lists.save(&list).await?;
        Ok(())
    }

    /// Marks every incomplete item in the list as completed.
    ///
    /// Persists the list once, and only if anything changed. This is the
    /// function jobs execute; there is no concurrency coordination — a
    /// concurrent mutation of the same list is resolved last-writer-wins.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::ListNotFound` if the list is absent.
    pub async fn complete_all(
        &self,
        todo_list_id: u64,
    ) -> Result<CompleteAllOutcome, ServiceError> {
        let mut list = self.lists.get(todo_list_id).await?;

        let completed = list.complete_all_items();
        if completed > 0 {
            self.lists.save(&list).await?;
        }

        Ok(CompleteAllOutcome {
            completed,
            message: format!("Completed {completed} tasks"),
        })
    }

    fn mutate_item(
        list: &mut TodoList,
        todo_list_id: u64,
        item_id: u64,
        mutate: impl FnOnce(&mut TodoItem),
    ) -> Result<TodoItem, ServiceError> {
        let item = list
            .item_mut(item_id)
            .ok_or(ServiceError::item_not_found(todo_list_id, item_id))?;
        mutate(item);
        Ok(item.clone())
    }
}
