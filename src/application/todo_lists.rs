//! TodoList service: CRUD and name uniqueness over the key-value store.
//!
//! Lists are stored one JSON document per list under `todolist:{id}`, with
//! ids allocated from the `todolist:next_id` counter. Duplicate detection is
//! a linear scan over the deserialized lists — the collection is small and
//! the observable behavior is what matters.

use std::sync::Arc;

use crate::domain::TodoList;
use crate::infrastructure::store::{KeyValueStore, StoreError};

use super::errors::ServiceError;

const LIST_KEY_PREFIX: &str = "todolist:";
const LIST_COUNTER_KEY: &str = "todolist:next_id";

/// Service for managing todo lists.
#[derive(Clone)]
pub struct TodoListService {
    store: Arc<dyn KeyValueStore>,
}

impl TodoListService {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn list_key(todo_list_id: u64) -> String {
        format!("{LIST_KEY_PREFIX}{todo_list_id}")
    }

    /// All lists, ordered by id.
    ///
    /// Ids are allocated monotonically, so id order is creation order.
    pub async fn all(&self) -> Result<Vec<TodoList>, ServiceError> {
        let keys = self.store.keys(LIST_KEY_PREFIX).await?;

        let mut lists = Vec::with_capacity(keys.len());
        for key in keys {
            // The counter shares the key prefix with the documents.
            if key == LIST_COUNTER_KEY {
                continue;
            }
            if let Some(data) = self.store.get(&key).await? {
                lists.push(decode(&data)?);
            }
        }
        lists.sort_by_key(|list| list.id);
        Ok(lists)
    }

    /// Looks up a list, returning `None` when absent.
    pub async fn find(&self, todo_list_id: u64) -> Result<Option<TodoList>, ServiceError> {
        match self.store.get(&Self::list_key(todo_list_id)).await? {
            Some(data) => Ok(Some(decode(&data)?)),
            None => Ok(None),
        }
    }

    /// Looks up a list.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::ListNotFound` when absent.
    pub async fn get(&self, todo_list_id: u64) -> Result<TodoList, ServiceError> {
        self.find(todo_list_id)
            .await?
            .ok_or(ServiceError::ListNotFound(todo_list_id))
    }

    /// Creates a new, empty list.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::DuplicateName` if another list already uses
    /// the name (case-insensitive).
    pub async fn create(&self, name: &str) -> Result<TodoList, ServiceError> {
        if self.name_taken(name, None).await? {
            return Err(ServiceError::duplicate_name(name));
        }

        let id = self.store.next_id(LIST_COUNTER_KEY).await?;
        let list = TodoList::new(id, name);
        self.save(&list).await?;
        Ok(list)
    }

    /// Renames a list, preserving its items.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::ListNotFound` when absent and
    /// `ServiceError::DuplicateName` if a *different* list already uses the
    /// name (case-insensitive).
    pub async fn update(&self, todo_list_id: u64, name: &str) -> Result<TodoList, ServiceError> {
        let mut list = self.get(todo_list_id).await?;

        if self.name_taken(name, Some(todo_list_id)).await? {
            return Err(ServiceError::duplicate_name(name));
        }

        list.rename(name);
        self.save(&list).await?;
        Ok(list)
    }

    /// Deletes a list and, with it, all of its items.
    ///
    /// The per-list item counter is intentionally left behind: item ids are
    /// never reused, even if a list id ever reappeared.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::ListNotFound` when absent.
    pub async fn delete(&self, todo_list_id: u64) -> Result<(), ServiceError> {
        let removed = self.store.delete(&Self::list_key(todo_list_id)).await?;
        if removed {
            Ok(())
        } else {
            Err(ServiceError::ListNotFound(todo_list_id))
        }
    }

    /// Persists a list document.
    ///
    /// Also used by the item service after item mutations: the list is the
    /// unit of persistence.
    pub async fn save(&self, list: &TodoList) -> Result<(), ServiceError> {
        let data = serde_json::to_string(list).map_err(StoreError::from)?;
        self.store.put(&Self::list_key(list.id), &data).await?;
        Ok(())
    }

    async fn name_taken(
        &self,
        name: &str,
        exclude_id: Option<u64>,
    ) -> Result<bool, ServiceError> {
        let lists = self.all().await?;
        Ok(lists
            .iter()
            .filter(|list| exclude_id != Some(list.id))
            .any(|list| list.name_conflicts_with(name)))
    }
}

fn decode(data: &str) -> Result<TodoList, ServiceError> {
    serde_json::from_str(data).map_err(|error| ServiceError::Store(StoreError::from(error)))
}
