//! Dependency injection container for the application.
//!
//! Holds the configuration and the store/queue ports behind trait objects
//! so handlers, the worker, and tests can share one wiring point with
//! different implementations (Redis in deployment, in-memory in tests).

use std::sync::Arc;

use crate::application::{TodoItemService, TodoListService};

use super::config::AppConfig;
use super::jobs::JobQueue;
use super::store::KeyValueStore;

/// Application dependency container.
///
/// Cloning is cheap: the store and queue are shared behind `Arc`s. The
/// container doubles as the axum router state.
#[derive(Clone)]
pub struct AppDependencies {
    config: AppConfig,
    store: Arc<dyn KeyValueStore>,
    job_queue: Arc<dyn JobQueue>,
}

impl AppDependencies {
    /// Creates a new `AppDependencies` container.
    #[must_use]
    pub fn new(
        config: AppConfig,
        store: Arc<dyn KeyValueStore>,
        job_queue: Arc<dyn JobQueue>,
    ) -> Self {
        Self {
            config,
            store,
            job_queue,
        }
    }

    /// Returns a reference to the application configuration.
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns a reference to the key-value store.
    #[must_use]
    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    /// Returns a reference to the job queue.
    #[must_use]
    pub fn job_queue(&self) -> &Arc<dyn JobQueue> {
        &self.job_queue
    }

    /// Builds a todo-list service over the shared store.
    #[must_use]
    pub fn todo_lists(&self) -> TodoListService {
        TodoListService::new(Arc::clone(&self.store))
    }

    /// Builds a todo-item service over the shared store.
    #[must_use]
    pub fn todo_items(&self) -> TodoItemService {
        TodoItemService::new(Arc::clone(&self.store))
    }
}

impl std::fmt::Debug for AppDependencies {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("AppDependencies")
            .field("config", &self.config)
            .field("store", &"<dyn KeyValueStore>")
            .field("job_queue", &"<dyn JobQueue>")
            .finish()
    }
}
