//! camp-api server: loads config from the environment, prepares the schema, serves HTTP.

use camp_api::{app, apply_migrations, config, connect, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("camp_api=info,tower_http=info")),
        )
        .init();

    let config = config::from_env()?;
    let pool = connect(&config).await?;
    apply_migrations(&pool).await?;

    let state = AppState::new(pool, config.json_format);
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
