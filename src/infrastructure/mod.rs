//! Infrastructure layer for the TodoList application.
//!
//! This module contains all infrastructure concerns:
//!
//! - **Configuration**: application settings loaded from environment variables
//! - **Store**: the key-value persistence port with in-memory and Redis
//!   adapters
//! - **Jobs**: the job queue port with in-memory and Redis adapters
//! - **Dependencies**: dependency injection container
//!
//! External dependencies are abstracted behind traits; handlers and the
//! worker only ever see `Arc<dyn KeyValueStore>` / `Arc<dyn JobQueue>`.

pub mod config;
pub mod dependencies;
pub mod jobs;
pub mod store;

pub use config::{AppConfig, ConfigError, StoreBackend};
pub use dependencies::AppDependencies;
pub use jobs::{InMemoryJobQueue, JobCommand, JobId, JobQueue, JobRecord, JobStatus, QueueError, RedisJobQueue};
pub use store::{InMemoryStore, KeyValueStore, RedisConnection, RedisStore, StoreError};
