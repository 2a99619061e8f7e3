//! SQLite pool construction.

use crate::config::AppConfig;
use crate::error::{AppError, ConfigError};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Open the pool described by `config`, creating the database file if missing.
/// Foreign keys are enforced on every connection so cascades and reference checks hold.
pub async fn connect(config: &AppConfig) -> Result<SqlitePool, AppError> {
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .map_err(ConfigError::DatabaseUrl)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = if config.is_in_memory() {
        // Each connection to `:memory:` is a separate database.
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?
    };
    tracing::info!(url = %config.database_url, "connected to database");
    Ok(pool)
}
