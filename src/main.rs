use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use game_vault::{
    config::Config, create_app, database::Database, handlers::AppState, storage::LocalStorage,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("game_vault=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;

    tracing::info!("Connecting to database");
    let database = Database::new(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    database.migrate().await.context("Failed to run migrations")?;

    let storage = LocalStorage::new(&config.storage_dir, &config.public_base_url)
        .context("Failed to open asset storage")?;
    tracing::info!("Serving assets from {}", storage.base_path().display());

    let bind_addr = config.bind_addr();
    let state = AppState::new(Arc::new(database), Arc::new(storage), config)?;
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;
    tracing::info!("Listening on {}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
