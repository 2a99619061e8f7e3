//! `/activities` and `/activities/:id`.

use super::parse_id;
use crate::error::AppError;
use crate::response::{no_content, ok};
use crate::service::ActivityService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::Response,
};

const ENTITY: &str = "Activity";

pub async fn list(State(state): State<AppState>) -> Result<Response, AppError> {
    let activities = ActivityService::list(&state.pool).await?;
    Ok(ok(activities))
}

pub async fn read(State(state): State<AppState>, Path(id_str): Path<String>) -> Result<Response, AppError> {
    let id = parse_id(&id_str, ENTITY)?;
    let activity = ActivityService::detail(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound(ENTITY))?;
    Ok(ok(activity))
}

pub async fn delete(State(state): State<AppState>, Path(id_str): Path<String>) -> Result<Response, AppError> {
    let id = parse_id(&id_str, ENTITY)?;
    ActivityService::delete(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound(ENTITY))?;
    Ok(no_content())
}
