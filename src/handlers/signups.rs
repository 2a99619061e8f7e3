//! `/signups`.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::{NewSignup, SignupInput};
use crate::response::created;
use crate::service::SignupService;
use crate::state::AppState;
use axum::{extract::State, response::Response};

pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<SignupInput>,
) -> Result<Response, AppError> {
    let new = NewSignup::try_from(input)?;
    let signup = SignupService::create(&state.pool, new).await?;
    Ok(created(signup))
}
