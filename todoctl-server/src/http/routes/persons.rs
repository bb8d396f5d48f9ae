//! Person endpoints

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::db::repos::PersonRepo;
use crate::http::error::{ApiError, Operation};
use crate::http::extractors::ValidId;
use crate::models::{Person, PersonDetails};
use crate::state::AppState;

/// GET /person/ - list all persons by name
async fn list_persons(State(state): State<AppState>) -> Result<Json<Vec<Person>>, ApiError> {
    let persons = PersonRepo::new(state.pool())
        .list()
        .await
        .map_err(|e| ApiError::read("persons", None, e))?;

    Ok(Json(persons))
}

/// POST /person/ - add a person
async fn create_person(
    State(state): State<AppState>,
    body: Result<Json<PersonDetails>, JsonRejection>,
) -> Result<(StatusCode, Json<Person>), ApiError> {
    let Json(details) = body.map_err(|e| ApiError::decode(Operation::Adding, "person", e))?;

    let person = PersonRepo::new(state.pool())
        .create(details)
        .await
        .map_err(|e| ApiError::write(Operation::Adding, "person", None, e))?;

    tracing::info!(person_id = person.id, "Person added");
    Ok((StatusCode::CREATED, Json(person)))
}

/// GET /person/{id}/ - get a single person
async fn get_person(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<Person>, ApiError> {
    let person = PersonRepo::new(state.pool())
        .get(id)
        .await
        .map_err(|e| ApiError::read("person", Some(id), e))?;

    Ok(Json(person))
}

/// PUT /person/{id}/ - replace a person
async fn update_person(
    State(state): State<AppState>,
    ValidId(id): ValidId,
    body: Result<Json<PersonDetails>, JsonRejection>,
) -> Result<Json<Person>, ApiError> {
    let Json(details) = body.map_err(|e| ApiError::decode(Operation::Updating, "person", e))?;

    let person = PersonRepo::new(state.pool())
        .update(id, details)
        .await
        .map_err(|e| ApiError::write(Operation::Updating, "person", Some(id), e))?;

    Ok(Json(person))
}

/// DELETE /person/{id}/ - delete a person
async fn delete_person(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<StatusCode, ApiError> {
    PersonRepo::new(state.pool())
        .delete(id)
        .await
        .map_err(|e| ApiError::write(Operation::Deleting, "person", Some(id), e))?;

    tracing::info!(person_id = id, "Person deleted");
    Ok(StatusCode::OK)
}

/// Person routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/person/", get(list_persons).post(create_person))
        .route(
            "/person/{id}/",
            get(get_person).put(update_person).delete(delete_person),
        )
}
