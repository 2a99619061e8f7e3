//! Route registration and the full application router.

mod camp;
mod common;

pub use camp::camp_routes;
pub use common::common_routes;

use crate::response::format_json;
use crate::state::AppState;
use axum::{middleware, Router};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Request bodies are small JSON objects.
pub const BODY_LIMIT: usize = 64 * 1024;

/// Everything the server mounts, with formatting, body-limit and tracing layers.
pub fn app(state: AppState) -> Router {
    let json_format = state.json_format;
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(camp_routes(state))
        .layer(middleware::from_fn_with_state(json_format, format_json))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT))
        .layer(TraceLayer::new_for_http())
}
