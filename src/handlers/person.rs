//! Person resource handlers: create, list, fetch by id.

use crate::error::AppError;
use crate::model::Person;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

/// POST /person: the id must be unassigned; the store generates it. Nothing
/// is persisted when the payload is rejected.
pub async fn create(
    State(state): State<AppState>,
    Json(person): Json<Person>,
) -> Result<(StatusCode, Json<Person>), AppError> {
    if person.id.is_some() {
        return Err(AppError::Validation("id must not be set on create".into()));
    }
    let created = state.people.save(person).await?;
    tracing::info!(id = ?created.id, "created person");
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /person: all persons, sorted by name ascending.
pub async fn find_all(State(state): State<AppState>) -> Result<Json<Vec<Person>>, AppError> {
    let people = state.people.find_all().await?;
    Ok(Json(people))
}

/// GET /person/:id: 404 with a descriptive message when the id is unknown.
pub async fn find_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Person>, AppError> {
    let person = state.people.find_by_id(id).await?.ok_or_else(|| {
        AppError::NotFound(format!("person with id {id} does not exist"))
    })?;
    Ok(Json(person))
}
