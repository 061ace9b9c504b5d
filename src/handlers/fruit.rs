//! Fruit resource handlers: list, filter by color, create, delete, change color.

use crate::error::AppError;
use crate::model::Fruit;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

/// GET /fruits: every fruit, ascending by id.
pub async fn find_all(State(state): State<AppState>) -> Result<Json<Vec<Fruit>>, AppError> {
    let fruits = state.fruits.find_all().await?;
    tracing::info!(count = fruits.len(), "found fruits");
    Ok(Json(fruits))
}

/// GET /fruits/color/:color: exact, case-sensitive match. An unknown color
/// is a 200 with an empty array, not an error.
pub async fn find_by_color(
    State(state): State<AppState>,
    Path(color): Path<String>,
) -> Result<Json<Vec<Fruit>>, AppError> {
    let fruits = state.fruits.find_by_color(&color).await?;
    tracing::info!(count = fruits.len(), color = %color, "found fruits by color");
    Ok(Json(fruits))
}

/// POST /fruits/name/:name/color/:color: always inserts a new row; there is
/// no duplicate check.
pub async fn create(
    State(state): State<AppState>,
    Path((name, color)): Path<(String, String)>,
) -> Result<(StatusCode, Json<Fruit>), AppError> {
    let created = state.fruits.save(Fruit::new(name, color)).await?;
    tracing::info!(id = ?created.id, name = %created.name, color = %created.color, "created fruit");
    Ok((StatusCode::CREATED, Json(created)))
}

/// DELETE /fruits/:id: 204 on success, 404 when the id does not exist.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if !state.fruits.delete_by_id(id).await? {
        return Err(AppError::NotFound(format!(
            "fruit with id {id} does not exist"
        )));
    }
    tracing::info!(id, "deleted fruit");
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /fruits/id/:id/color/:color: load the row, set its color, save it
/// back. A missing id is 404, same as delete.
pub async fn change_color(
    State(state): State<AppState>,
    Path((id, color)): Path<(i64, String)>,
) -> Result<Json<Fruit>, AppError> {
    let mut fruit = state.fruits.find_by_id(id).await?.ok_or_else(|| {
        AppError::NotFound(format!("fruit with id {id} does not exist"))
    })?;
    fruit.color = color;
    let updated = state.fruits.save(fruit).await?;
    tracing::info!(id, color = %updated.color, "changed fruit color");
    Ok(Json(updated))
}
