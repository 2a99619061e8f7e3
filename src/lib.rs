//! camp-api: campers, activities and their signups over HTTP/JSON, stored in SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod state;
pub mod store;

pub use config::{AppConfig, JsonFormat};
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use routes::app;
pub use state::AppState;
pub use store::connect;
