//! HTTP client wrapper for integration tests.

use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use std::time::Duration;

#[derive(Clone)]
pub struct TodoApiClient {
    client: Client,
    base_url: String,
}

impl TodoApiClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // Health check
    pub async fn health(&self) -> ApiResult<HealthDto> {
        self.get("/health").await
    }

    // TodoList operations
    pub async fn list_todo_lists(&self) -> ApiResult<Vec<TodoListDto>> {
        self.get("/api/todolists").await
    }

    pub async fn get_todo_list(&self, todo_list_id: u64) -> ApiResult<TodoListDto> {
        self.get(&format!("/api/todolists/{todo_list_id}")).await
    }

    pub async fn create_todo_list(&self, body: &serde_json::Value) -> ApiResult<TodoListDto> {
        self.post("/api/todolists", body).await
    }

    pub async fn update_todo_list(
        &self,
        todo_list_id: u64,
        body: &serde_json::Value,
    ) -> ApiResult<TodoListDto> {
        self.put(&format!("/api/todolists/{todo_list_id}"), body)
            .await
    }

    pub async fn delete_todo_list(&self, todo_list_id: u64) -> ApiResult<()> {
        self.delete(&format!("/api/todolists/{todo_list_id}")).await
    }

    // TodoItem operations
    pub async fn list_items(&self, todo_list_id: u64) -> ApiResult<Vec<TodoItemDto>> {
        self.get(&format!("/api/todolists/{todo_list_id}/items"))
            .await
    }

    pub async fn get_item(&self, todo_list_id: u64, item_id: u64) -> ApiResult<TodoItemDto> {
        self.get(&format!("/api/todolists/{todo_list_id}/items/{item_id}"))
            .await
    }

    pub async fn create_item(
        &self,
        todo_list_id: u64,
        body: &serde_json::Value,
    ) -> ApiResult<TodoItemDto> {
        self.post(&format!("/api/todolists/{todo_list_id}/items"), body)
            .await
    }

    pub async fn update_item(
        &self,
        todo_list_id: u64,
        item_id: u64,
        body: &serde_json::Value,
    ) -> ApiResult<TodoItemDto> {
        self.put(
            &format!("/api/todolists/{todo_list_id}/items/{item_id}"),
            body,
        )
        .await
    }

    pub async fn toggle_item(&self, todo_list_id: u64, item_id: u64) -> ApiResult<TodoItemDto> {
        self.patch_empty(&format!(
            "/api/todolists/{todo_list_id}/items/{item_id}/toggle"
        ))
        .await
    }

    pub async fn delete_item(&self, todo_list_id: u64, item_id: u64) -> ApiResult<()> {
        self.delete(&format!("/api/todolists/{todo_list_id}/items/{item_id}"))
            .await
    }

    pub async fn complete_all(&self, todo_list_id: u64) -> ApiResult<EnqueuedJobDto> {
        self.post_empty(&format!(
            "/api/todolists/{todo_list_id}/items/complete-all"
        ))
        .await
    }

    // Job operations
    pub async fn get_job(&self, job_id: &str) -> ApiResult<JobDto> {
        self.get(&format!("/api/jobs/{job_id}")).await
    }

    // Internal helpers
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        parse_response(response).await
    }

    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> ApiResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        parse_response(response).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.client.post(self.url(path)).send().await?;
        parse_response(response).await
    }

    async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> ApiResult<T> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        parse_response(response).await
    }

    async fn patch_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.client.patch(self.url(path)).send().await?;
        parse_response(response).await
    }

    async fn delete(&self, path: &str) -> ApiResult<()> {
        let response = self.client.delete(self.url(path)).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(parse_error(response, status).await)
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug)]
pub enum ApiError {
    Http(reqwest::Error),
    Api { status: StatusCode, code: String },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err)
    }
}

async fn parse_response<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();

    if status.is_success() {
        response.json().await.map_err(ApiError::Http)
    } else {
        Err(parse_error(response, status).await)
    }
}

async fn parse_error(response: Response, status: StatusCode) -> ApiError {
    // Bodies produced by the error middleware carry a machine-readable
    // code; extractor rejections (422 on malformed JSON bodies) do not.
    match response.json::<ApiErrorBody>().await {
        Ok(body) => ApiError::Api {
            status,
            code: body.code,
        },
        Err(_) => ApiError::Api {
            status,
            code: String::new(),
        },
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: String,
}

// DTO types for tests

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TodoItemDto {
    pub id: u64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TodoListDto {
    pub id: u64,
    pub name: String,
    pub items: Vec<TodoItemDto>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct EnqueuedJobDto {
    pub message: String,
    pub job_id: String,
    pub todo_list_id: u64,
    pub check_status: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct JobDto {
    pub id: String,
    pub status: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct HealthDto {
    pub status: String,
    pub version: String,
}
