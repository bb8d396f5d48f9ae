//! Router behaviour that does not need a reachable database

mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use common::{offline_app, send};

// --- list ---

#[tokio::test]
async fn list_persons_with_store_down_is_not_found() {
    let (status, body) = send(&offline_app(), "GET", "/person/", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "error finding persons");
}

#[tokio::test]
async fn list_tasks_with_store_down_is_not_found() {
    let (status, _) = send(&offline_app(), "GET", "/task/", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// --- get ---

#[tokio::test]
async fn get_with_store_down_is_not_found() {
    let app = offline_app();
    let (person, _) = send(&app, "GET", "/person/999999/", None).await;
    let (task, _) = send(&app, "GET", "/task/999999/", None).await;
    assert_eq!(person, StatusCode::NOT_FOUND);
    assert_eq!(task, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_numeric_id_does_not_match() {
    let (status, _) = send(&offline_app(), "GET", "/person/abc/", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_trailing_separator_does_not_match() {
    let (status, _) = send(&offline_app(), "GET", "/task/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// --- create ---

#[tokio::test]
async fn create_person_with_bad_json_is_400() {
    let (status, body) = send(&offline_app(), "POST", "/person/", Some("{not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
    assert_eq!(body["message"], "error adding person");
}

#[tokio::test]
async fn create_task_missing_description_is_400() {
    let (status, body) = send(&offline_app(), "POST", "/task/", Some(r#"{"title":"t"}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "error adding task");
}

#[tokio::test]
async fn create_task_with_bad_timestamp_is_400() {
    let (status, _) = send(
        &offline_app(),
        "POST",
        "/task/",
        Some(r#"{"title":"t","description":"d","due_by":"next week"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_with_store_down_is_400() {
    let (status, body) = send(
        &offline_app(),
        "POST",
        "/person/",
        Some(r#"{"name":"Ann","email":"a@x.com"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "error adding person");
}

// --- update ---

#[tokio::test]
async fn update_with_out_of_range_id_is_400() {
    let (status, _) = send(
        &offline_app(),
        "PUT",
        "/person/2147483648/",
        Some(r#"{"name":"Ann","email":"a@x.com"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_task_with_bad_body_is_400() {
    let (status, body) = send(&offline_app(), "PUT", "/task/1/", Some(r#"{"priority":1}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "error updating task");
}

#[tokio::test]
async fn update_without_content_type_is_400() {
    let request = Request::builder()
        .method("PUT")
        .uri("/person/1/")
        .body(Body::from(r#"{"name":"Ann","email":"a@x.com"}"#))
        .unwrap();
    let response = offline_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
}

// --- delete ---

#[tokio::test]
async fn delete_with_store_down_is_surfaced() {
    let (status, body) = send(&offline_app(), "DELETE", "/task/1/", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "error deleting task");
}

#[tokio::test]
async fn delete_with_out_of_range_id_is_400() {
    let (status, _) = send(&offline_app(), "DELETE", "/person/99999999999/", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
