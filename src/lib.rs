//! TodoList API
//!
//! A CRUD API for managing todo lists and their items, backed by a key-value
//! store (process-local in-memory or Redis), with bulk completion offloaded
//! to a background job queue consumed by a worker.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//!
//! - **Domain Layer**: entities (`TodoList`, `TodoItem`) and their state
//!   transitions
//! - **Application Layer**: services, the job worker, and the service error
//!   taxonomy
//! - **Infrastructure Layer**: configuration, the key-value store port and
//!   its adapters, the job queue port and its adapters
//! - **API Layer**: HTTP handlers, DTOs, error-mapping middleware

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
