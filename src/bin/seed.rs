//! Populate the configured database with sample activities, campers and signups.

use camp_api::{apply_migrations, config, connect, seed::seed_sample_data};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("camp_api=info")),
        )
        .init();

    let config = config::from_env()?;
    let pool = connect(&config).await?;
    apply_migrations(&pool).await?;
    let summary = seed_sample_data(&pool).await?;
    println!(
        "seeded {} activities, {} campers, {} signups into {}",
        summary.activities, summary.campers, summary.signups, config.database_url
    );
    Ok(())
}
