//! `/campers` and `/campers/:id`.

use super::parse_id;
use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::{CamperInput, NewCamper};
use crate::response::{accepted, created, ok};
use crate::service::CamperService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::Response,
};
use serde_json::Value;

const ENTITY: &str = "Camper";

pub async fn list(State(state): State<AppState>) -> Result<Response, AppError> {
    let campers = CamperService::list(&state.pool).await?;
    Ok(ok(campers))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CamperInput>,
) -> Result<Response, AppError> {
    let new = NewCamper::try_from(input)?;
    let camper = CamperService::create(&state.pool, new).await?;
    Ok(created(camper))
}

pub async fn read(State(state): State<AppState>, Path(id_str): Path<String>) -> Result<Response, AppError> {
    let id = parse_id(&id_str, ENTITY)?;
    let camper = CamperService::detail(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound(ENTITY))?;
    Ok(ok(camper))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(body): JsonBody<Value>,
) -> Result<Response, AppError> {
    // Body is extracted before the id is parsed: a malformed body on a bad id is a 400, not a 404.
    let id = parse_id(&id_str, ENTITY)?;
    let Value::Object(patch) = body else {
        return Err(AppError::BadRequest("body must be a JSON object".into()));
    };
    let camper = CamperService::update(&state.pool, id, &patch)
        .await?
        .ok_or(AppError::NotFound(ENTITY))?;
    Ok(accepted(camper))
}
