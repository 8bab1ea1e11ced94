//! JSON actor handlers (v2 API).
//!
//! Actors are read-only; the film association is resolved as a derived
//! query through the join table.

use axum::Json;
use axum::extract::{Path, State};

use cinehub_core::error::AppError;
use cinehub_entity::actor::Actor;
use cinehub_entity::film::FilmSummary;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/v2/actors/{id}
pub async fn get_actor(
    State(state): State<AppState>,
    Path(actor_id): Path<i16>,
) -> Result<Json<Actor>, ApiError> {
    let actor = state
        .actor_repo
        .find_by_id(actor_id)
        .await?
        .ok_or_else(|| AppError::not_found("Actor not found"))?;
    Ok(Json(actor))
}

/// GET /api/v2/actors/{id}/films
pub async fn get_actor_films(
    State(state): State<AppState>,
    Path(actor_id): Path<i16>,
) -> Result<Json<Vec<FilmSummary>>, ApiError> {
    state
        .actor_repo
        .find_by_id(actor_id)
        .await?
        .ok_or_else(|| AppError::not_found("Actor not found"))?;

    let films = state.actor_repo.find_films(actor_id).await?;
    Ok(Json(films))
}
