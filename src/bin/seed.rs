//! Replace the configured database's catalog with sample data.

use pizza_catalog::{apply_migrations, seed, store, Settings};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pizza_catalog=info")),
        )
        .init();

    let pool = store::connect(&settings.database_url, settings.max_connections).await?;
    apply_migrations(&pool).await?;
    let summary = seed::seed(&pool).await?;
    tracing::info!(
        restaurants = summary.restaurants,
        pizzas = summary.pizzas,
        restaurant_pizzas = summary.restaurant_pizzas,
        "seeding complete"
    );
    pool.close().await;
    Ok(())
}
