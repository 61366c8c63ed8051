//! Integration tests for the /api/todolists endpoints.

use crate::common::*;
use reqwest::StatusCode;
use rstest::rstest;

// =============================================================================
// Index
// =============================================================================

#[rstest]
#[tokio::test]
async fn index_is_empty_initially() {
    let app = TestApp::spawn().await;
    let client = TodoApiClient::new(&app.base_url);

    let result = client.list_todo_lists().await;

    assert_success(&result);
    assert!(result.unwrap().is_empty());
}

#[rstest]
#[tokio::test]
async fn index_returns_lists_in_creation_order() {
    let app = TestApp::spawn().await;
    let client = TodoApiClient::new(&app.base_url);
    client
        .create_todo_list(&ListFactory::create_request("Groceries"))
        .await
        .unwrap();
    client
        .create_todo_list(&ListFactory::create_request("Errands"))
        .await
        .unwrap();

    let lists = client.list_todo_lists().await.unwrap();

    let names: Vec<&str> = lists.iter().map(|list| list.name.as_str()).collect();
    assert_eq!(names, vec!["Groceries", "Errands"]);
}

// =============================================================================
// Create
// =============================================================================

#[rstest]
#[tokio::test]
async fn create_returns_201_with_an_empty_items_list() {
    let app = TestApp::spawn().await;
    let client = TodoApiClient::new(&app.base_url);

    let response = reqwest::Client::new()
        .post(client.url("/api/todolists"))
        .json(&ListFactory::create_request("Groceries"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let list: TodoListDto = response.json().await.unwrap();
    assert_eq!(list.id, 1);
    assert_eq!(list.name, "Groceries");
    assert!(list.items.is_empty());
}

#[rstest]
#[tokio::test]
async fn created_ids_are_strictly_increasing() {
    let app = TestApp::spawn().await;
    let client = TodoApiClient::new(&app.base_url);

    let first = client
        .create_todo_list(&ListFactory::create_request("Groceries"))
        .await
        .unwrap();
    client.delete_todo_list(first.id).await.unwrap();
    let second = client
        .create_todo_list(&ListFactory::create_request("Errands"))
        .await
        .unwrap();

    assert!(second.id > first.id, "deleted ids must never be reused");
}

#[rstest]
#[case("Groceries")]
#[case("groceries")]
#[case("GROCERIES")]
#[tokio::test]
async fn create_rejects_duplicate_names_case_insensitively(#[case] duplicate: &str) {
    let app = TestApp::spawn().await;
    let client = TodoApiClient::new(&app.base_url);
    client
        .create_todo_list(&ListFactory::create_request("Groceries"))
        .await
        .unwrap();

    let result = client
        .create_todo_list(&ListFactory::create_request(duplicate))
        .await;

    assert_api_error(&result, "DUPLICATE_NAME", StatusCode::BAD_REQUEST);
}

#[rstest]
#[case("")]
#[case("   ")]
#[tokio::test]
async fn create_rejects_empty_names(#[case] empty_name: &str) {
    let app = TestApp::spawn().await;
    let client = TodoApiClient::new(&app.base_url);

    let result = client
        .create_todo_list(&ListFactory::create_request(empty_name))
        .await;

    assert_api_error(&result, "VALIDATION_ERROR", StatusCode::UNPROCESSABLE_ENTITY);
}

#[rstest]
#[tokio::test]
async fn create_rejects_a_missing_name_field() {
    let app = TestApp::spawn().await;
    let client = TodoApiClient::new(&app.base_url);

    let result = client.create_todo_list(&serde_json::json!({})).await;

    assert_status(&result, StatusCode::UNPROCESSABLE_ENTITY);
}

// =============================================================================
// Show
// =============================================================================

#[rstest]
#[tokio::test]
async fn show_returns_the_list() {
    let app = TestApp::spawn().await;
    let client = TodoApiClient::new(&app.base_url);
    let created = client
        .create_todo_list(&ListFactory::create_request("Groceries"))
        .await
        .unwrap();

    let fetched = client.get_todo_list(created.id).await.unwrap();

    assert_eq!(fetched, created);
}

#[rstest]
#[tokio::test]
async fn show_unknown_id_returns_404() {
    let app = TestApp::spawn().await;
    let client = TodoApiClient::new(&app.base_url);

    let result = client.get_todo_list(999).await;

    assert_api_error(&result, "LIST_NOT_FOUND", StatusCode::NOT_FOUND);
}

// =============================================================================
// Update
// =============================================================================

#[rstest]
#[tokio::test]
async fn update_renames_and_preserves_items() {
    let app = TestApp::spawn().await;
    let client = TodoApiClient::new(&app.base_url);
    let list = client
        .create_todo_list(&ListFactory::create_request("Groceries"))
        .await
        .unwrap();
    client
        .create_item(list.id, &ItemFactory::create_request("Milk"))
        .await
        .unwrap();

    let updated = client
        .update_todo_list(list.id, &ListFactory::create_request("Food"))
        .await
        .unwrap();

    assert_eq!(updated.name, "Food");
    assert_eq!(updated.items.len(), 1);
}

#[rstest]
#[tokio::test]
async fn update_unknown_id_returns_404() {
    let app = TestApp::spawn().await;
    let client = TodoApiClient::new(&app.base_url);

    let result = client
        .update_todo_list(999, &ListFactory::create_request("Food"))
        .await;

    assert_api_error(&result, "LIST_NOT_FOUND", StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn update_rejects_another_lists_name() {
    let app = TestApp::spawn().await;
    let client = TodoApiClient::new(&app.base_url);
    client
        .create_todo_list(&ListFactory::create_request("Groceries"))
        .await
        .unwrap();
    let second = client
        .create_todo_list(&ListFactory::create_request("Errands"))
        .await
        .unwrap();

    let result = client
        .update_todo_list(second.id, &ListFactory::create_request("groceries"))
        .await;

    assert_api_error(&result, "DUPLICATE_NAME", StatusCode::BAD_REQUEST);
}

#[rstest]
#[tokio::test]
async fn update_to_own_name_never_conflicts() {
    let app = TestApp::spawn().await;
    let client = TodoApiClient::new(&app.base_url);
    let list = client
        .create_todo_list(&ListFactory::create_request("Groceries"))
        .await
        .unwrap();

    let updated = client
        .update_todo_list(list.id, &ListFactory::create_request("GROCERIES"))
        .await
        .unwrap();

    assert_eq!(updated.name, "GROCERIES");
}

#[rstest]
#[tokio::test]
async fn update_rejects_a_missing_name_field() {
    let app = TestApp::spawn().await;
    let client = TodoApiClient::new(&app.base_url);
    let list = client
        .create_todo_list(&ListFactory::create_request("Groceries"))
        .await
        .unwrap();

    let result = client.update_todo_list(list.id, &serde_json::json!({})).await;

    assert_status(&result, StatusCode::UNPROCESSABLE_ENTITY);
}

// =============================================================================
// Delete
// =============================================================================

#[rstest]
#[tokio::test]
async fn delete_returns_204_and_removes_the_list() {
    let app = TestApp::spawn().await;
    let client = TodoApiClient::new(&app.base_url);
    let list = client
        .create_todo_list(&ListFactory::create_request("Groceries"))
        .await
        .unwrap();

    let response = reqwest::Client::new()
        .delete(client.url(&format!("/api/todolists/{}", list.id)))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let result = client.get_todo_list(list.id).await;
    assert_api_error(&result, "LIST_NOT_FOUND", StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn delete_unknown_id_returns_404() {
    let app = TestApp::spawn().await;
    let client = TodoApiClient::new(&app.base_url);

    let result = client.delete_todo_list(999).await;

    assert_api_error(&result, "LIST_NOT_FOUND", StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test]
async fn delete_cascades_to_items() {
    let app = TestApp::spawn().await;
    let client = TodoApiClient::new(&app.base_url);
    let list = client
        .create_todo_list(&ListFactory::create_request("Groceries"))
        .await
        .unwrap();
    let item = client
        .create_item(list.id, &ItemFactory::create_request("Milk"))
        .await
        .unwrap();
    client.delete_todo_list(list.id).await.unwrap();

    let result = client.get_item(list.id, item.id).await;

    assert_api_error(&result, "LIST_NOT_FOUND", StatusCode::NOT_FOUND);
}
