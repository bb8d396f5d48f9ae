//! Task endpoints

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::db::repos::TaskRepo;
use crate::http::error::{ApiError, Operation};
use crate::http::extractors::ValidId;
use crate::models::{Task, TaskDetails};
use crate::state::AppState;

/// GET /task/ - list all tasks by id
async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = TaskRepo::new(state.pool())
        .list()
        .await
        .map_err(|e| ApiError::read("tasks", None, e))?;

    Ok(Json(tasks))
}

/// POST /task/ - add a task
async fn create_task(
    State(state): State<AppState>,
    body: Result<Json<TaskDetails>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let Json(details) = body.map_err(|e| ApiError::decode(Operation::Adding, "task", e))?;

    let task = TaskRepo::new(state.pool())
        .create(details)
        .await
        .map_err(|e| ApiError::write(Operation::Adding, "task", None, e))?;

    tracing::info!(task_id = task.id, "Task added");
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /task/{id}/ - get a single task
async fn get_task(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<Task>, ApiError> {
    let task = TaskRepo::new(state.pool())
        .get(id)
        .await
        .map_err(|e| ApiError::read("task", Some(id), e))?;

    Ok(Json(task))
}

/// PUT /task/{id}/ - replace a task
async fn update_task(
    State(state): State<AppState>,
    ValidId(id): ValidId,
    body: Result<Json<TaskDetails>, JsonRejection>,
) -> Result<Json<Task>, ApiError> {
    let Json(details) = body.map_err(|e| ApiError::decode(Operation::Updating, "task", e))?;

    let task = TaskRepo::new(state.pool())
        .update(id, details)
        .await
        .map_err(|e| ApiError::write(Operation::Updating, "task", Some(id), e))?;

    Ok(Json(task))
}

/// DELETE /task/{id}/ - delete a task
async fn delete_task(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<StatusCode, ApiError> {
    TaskRepo::new(state.pool())
        .delete(id)
        .await
        .map_err(|e| ApiError::write(Operation::Deleting, "task", Some(id), e))?;

    tracing::info!(task_id = id, "Task deleted");
    Ok(StatusCode::OK)
}

/// Task routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/task/", get(list_tasks).post(create_task))
        .route(
            "/task/{id}/",
            get(get_task).put(update_task).delete(delete_task),
        )
}
