//! Shared application state for all routes.

use crate::config::JsonFormat;
use sqlx::SqlitePool;

#[derive(Clone, Debug)]
pub struct AppState {
    pub pool: SqlitePool,
    pub json_format: JsonFormat,
}

impl AppState {
    pub fn new(pool: SqlitePool, json_format: JsonFormat) -> Self {
        AppState { pool, json_format }
    }
}
