use anyhow::{Context, Result};
use arcade_api::{
    observability,
    store::{CatalogStore, MemoryCatalog, PgCatalog, Store},
    uploads::ImageStore,
    AppState, Config,
};
use arcade_shared::default_catalog;
use dotenv::dotenv;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = Config::from_env().context("Invalid configuration")?;
    observability::init_tracing(config.log_format)?;

    let catalog: Arc<dyn CatalogStore> = match config.database_url.as_deref() {
        Some(database_url) => {
            let catalog = PgCatalog::connect(database_url, config.db_max_connections)
                .await
                .context("Failed to connect to database")?;
            catalog.migrate().await.context("Failed to run migrations")?;
            let seeded = catalog.seed_if_empty(default_catalog()).await?;
            tracing::info!(seeded, "Database connected and migrations applied");
            Arc::new(catalog)
        }
        None => {
            tracing::info!("DATABASE_URL not set, serving the catalog from memory");
            Arc::new(MemoryCatalog::seeded())
        }
    };

    let images = ImageStore::new(&config.images_dir);
    images
        .ensure_dir()
        .await
        .with_context(|| format!("Failed to create {}", config.images_dir.display()))?;

    let state = AppState::new(Store::new(catalog), images);
    let app = arcade_api::app(state, &config);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(storage = config.storage_name(), "Server is up and running on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
