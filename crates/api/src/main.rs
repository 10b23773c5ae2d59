use anyhow::{Context, Result};
use dotenv::dotenv;
use ecommerce_api::{
    handler::{AppRouter, RouterSettings},
    state::AppState,
};
use shared::{
    abstract_trait::DynFileStorage,
    config::{Config, ConnectionManager, LocalFileStorage, run_migrations},
    utils::init_logger,
};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let is_enable_file = std::env::var("ENABLE_FILE_LOG")
        .map(|v| v == "true")
        .unwrap_or(false);

    let _log_guard = init_logger("ecommerce-api", is_dev, is_enable_file);

    let config = Config::init().context("Failed to load configuration")?;

    let pool = ConnectionManager::new_pool(
        &config.database,
        config.db_min_conn,
        config.db_max_conn,
    )
    .await
    .context("Failed to initialize database pool")?;

    if config.run_migrations {
        run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;
        info!("✅ Database migrations applied");
    }

    let storage = LocalFileStorage::init(config.upload_dir.clone())
        .await
        .context("Failed to prepare upload directory")?;
    let storage = Arc::new(storage) as DynFileStorage;

    let state = AppState::new(pool.clone(), &config, storage)
        .await
        .context("Failed to create AppState")?;

    let settings = RouterSettings {
        frontend_url: config.frontend_url.clone(),
        upload_dir: config.upload_dir.clone(),
    };

    AppRouter::serve(config.port, state, settings)
        .await
        .context("Failed to start server")?;

    info!("Shutting down servers...");
    pool.close().await;

    Ok(())
}
