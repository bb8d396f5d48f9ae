//! Shared helpers for router tests

#![allow(dead_code)]

use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower::ServiceExt;

use todoctl_server::db::schema;
use todoctl_server::{build_router, AppState};

/// Router over a pool that never reaches a database.
///
/// Requests rejected before storage behave normally; anything that hits
/// storage fails fast.
pub fn offline_app() -> Router {
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_millis(200))
        .connect_lazy("postgres://todo_app@127.0.0.1:1/todo")
        .expect("lazy pool");
    build_router(AppState::new(pool))
}

/// Router over the database named by `DATABASE_URL`, schema ensured.
pub async fn database_app() -> (Router, PgPool) {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let pool = todoctl_server::db::create_pool(&url)
        .await
        .expect("pool creation failed");
    schema::migrate(&pool).await.expect("migrate failed");
    (build_router(AppState::new(pool.clone())), pool)
}

/// Send a request and decode the response body as JSON (`Null` if empty).
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    let request = builder
        .body(Body::from(body.unwrap_or_default().to_owned()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Unique suffix so tests sharing a database do not collide.
pub fn unique(label: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{}-{}", label, nanos)
}
