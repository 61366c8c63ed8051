//! Process-local in-memory store.
//!
//! Used in development and in tests; everything lives in mutex-guarded maps
//! and is lost when the process exits. Locks are never held across an
//! `.await` point.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::error::StoreError;
use super::KeyValueStore;

/// In-memory [`KeyValueStore`] implementation.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    documents: Mutex<HashMap<String, String>>,
    counters: Mutex<HashMap<String, u64>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let documents = self
            .documents
            .lock()
            .map_err(|_| StoreError::unavailable("store mutex poisoned"))?;
        Ok(documents.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut documents = self
            .documents
            .lock()
            .map_err(|_| StoreError::unavailable("store mutex poisoned"))?;
        documents.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool, StoreError> {
        let mut documents = self
            .documents
            .lock()
            .map_err(|_| StoreError::unavailable("store mutex poisoned"))?;
        Ok(documents.remove(key).is_some())
    }

    async fn keys(&self, prefix: &str) -> Result<Vec<String>, StoreError> {
        let documents = self
            .documents
            .lock()
            .map_err(|_| StoreError::unavailable("store mutex poisoned"))?;
        Ok(documents
            .keys()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect())
    }

    async fn next_id(&self, counter_key: &str) -> Result<u64, StoreError> {
        let mut counters = self
            .counters
            .lock()
            .map_err(|_| StoreError::unavailable("store mutex poisoned"))?;
        let counter = counters.entry(counter_key.to_string()).or_insert(0);
        *counter += 1;
        Ok(*counter)
    }
}
