//! Catalog server: loads settings, opens the store, applies migrations and serves the API.

use pizza_catalog::{apply_migrations, build_app, store, AppState, Settings};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pizza_catalog=info,tower_http=info")),
        )
        .init();

    let pool = store::connect(&settings.database_url, settings.max_connections).await?;
    apply_migrations(&pool).await?;

    let app = build_app(AppState::new(pool), settings.body_limit);
    let listener = TcpListener::bind((settings.host.as_str(), settings.port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
