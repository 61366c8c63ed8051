//! Middleware for the API layer.

pub mod error_handler;

pub use error_handler::{ApiError, ApiErrorResponse};
