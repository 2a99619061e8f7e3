//! HTTP handlers for campers, activities and signups.

pub mod activities;
pub mod campers;
pub mod signups;

use crate::error::AppError;

/// Path ids route like integer converters: anything that is not an integer is simply not found.
pub(crate) fn parse_id(id_str: &str, entity: &'static str) -> Result<i64, AppError> {
    id_str.parse().map_err(|_| AppError::NotFound(entity))
}

/// `GET /`
pub async fn home() -> &'static str {
    ""
}
