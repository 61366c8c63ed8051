//! HTTP handlers for the TodoList API.
//!
//! Handlers extract request data, validate and transform DTOs to domain
//! types, call the services (or the job queue), and map results back to
//! response DTOs. Error mapping is centralized in the middleware module;
//! handlers just use `?`.

pub mod jobs;
pub mod todo_items;
pub mod todo_lists;
