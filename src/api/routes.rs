//! Route configuration for the TodoList API.
//!
//! # Routes
//!
//! | Method | Path | Handler | Description |
//! |--------|------|---------|-------------|
//! | GET | /api/todolists | `todo_lists::index` | All todo lists |
//! | GET | /api/todolists/{id} | `todo_lists::show` | One todo list |
//! | POST | /api/todolists | `todo_lists::create` | Create a todo list |
//! | PUT | /api/todolists/{id} | `todo_lists::update` | Rename a todo list |
//! | DELETE | /api/todolists/{id} | `todo_lists::destroy` | Delete a todo list |
//! | GET | /api/todolists/{id}/items | `todo_items::index` | All items of a list |
//! | GET | /api/todolists/{id}/items/{item_id} | `todo_items::show` | One item |
//! | POST | /api/todolists/{id}/items | `todo_items::create` | Create an item |
//! | PUT | /api/todolists/{id}/items/{item_id} | `todo_items::update` | Partial update |
//! | PATCH | /api/todolists/{id}/items/{item_id}/toggle | `todo_items::toggle` | Flip completion |
//! | DELETE | /api/todolists/{id}/items/{item_id} | `todo_items::destroy` | Delete an item |
//! | POST | /api/todolists/{id}/items/complete-all | `todo_items::complete_all` | Queue bulk completion |
//! | GET | /api/jobs/{job_id} | `jobs::show` | Job status |
//! | GET | /health | `health_check` | Health check |

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, patch, post};
use axum::{Json, Router};

use crate::api::dto::responses::HealthResponse;
use crate::api::handlers::{jobs, todo_items, todo_lists};
use crate::infrastructure::AppDependencies;

/// GET /health - Health check endpoint.
#[allow(clippy::unused_async)]
pub async fn health_check(
    State(_dependencies): State<AppDependencies>,
) -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    (StatusCode::OK, Json(response))
}

/// Creates the axum router with all API routes.
pub fn create_router(dependencies: AppDependencies) -> Router {
    Router::new()
        // TodoList routes
        .route(
            "/api/todolists",
            get(todo_lists::index).post(todo_lists::create),
        )
        .route(
            "/api/todolists/{todo_list_id}",
            get(todo_lists::show)
                .put(todo_lists::update)
                .delete(todo_lists::destroy),
        )
        // TodoItem routes
        .route(
            "/api/todolists/{todo_list_id}/items",
            get(todo_items::index).post(todo_items::create),
        )
        .route(
            "/api/todolists/{todo_list_id}/items/complete-all",
            post(todo_items::complete_all),
        )
        .route(
            "/api/todolists/{todo_list_id}/items/{item_id}",
            get(todo_items::show)
                .put(todo_items::update)
                .delete(todo_items::destroy),
        )
        .route(
            "/api/todolists/{todo_list_id}/items/{item_id}/toggle",
            patch(todo_items::toggle),
        )
        // Job routes
        .route("/api/jobs/{job_id}", get(jobs::show))
        // Health check
        .route("/health", get(health_check))
        // Add state
        .with_state(dependencies)
}
