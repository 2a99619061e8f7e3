//! Typed errors and HTTP mapping.

use crate::model::ValidationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
    #[error("database url: {0}")]
    DatabaseUrl(#[source] sqlx::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Lookup by id found nothing; carries the entity name ("Camper", "Activity").
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("validation: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Foreign-key or check constraint rejected by the store.
    #[error("integrity: {0}")]
    Integrity(String),
    #[error("database: {0}")]
    Db(sqlx::Error),
}

impl AppError {
    pub fn validation(error: ValidationError) -> Self {
        AppError::Validation(vec![error])
    }
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        AppError::validation(error)
    }
}

impl From<Vec<ValidationError>> for AppError {
    fn from(errors: Vec<ValidationError>) -> Self {
        AppError::Validation(errors)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &e {
            if db.is_foreign_key_violation() || db.is_check_violation() {
                return AppError::Integrity(db.message().to_string());
            }
        }
        AppError::Db(e)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Serialize)]
pub struct ErrorsBody {
    pub errors: Vec<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(entity) => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: format!("{} not found", entity),
                }),
            )
                .into_response(),
            AppError::Validation(errors) => {
                tracing::warn!(errors = %join_messages(&errors), "validation failed");
                let errors = errors.into_iter().map(|e| e.message).collect();
                (StatusCode::BAD_REQUEST, Json(ErrorsBody { errors })).into_response()
            }
            AppError::BadRequest(msg) | AppError::Integrity(msg) => {
                tracing::warn!(error = %msg, "request rejected");
                (StatusCode::BAD_REQUEST, Json(ErrorsBody { errors: vec![msg] })).into_response()
            }
            AppError::Config(e) => internal_error(&e),
            AppError::Db(e) => internal_error(&e),
        }
    }
}

fn internal_error(e: &dyn std::error::Error) -> Response {
    tracing::error!(error = %e, "request failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: "internal server error".into(),
        }),
    )
        .into_response()
}
