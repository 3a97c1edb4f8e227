use std::sync::Arc;

use dotenvy::dotenv;
use loomdesk::{
    api::{AppState, run_server},
    config::{AppConfig, catalogue, database},
    core::{catalog, events::PaymentEvents},
    email::LogMailer,
    errors::Result,
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();

    // 3. Load the application configuration
    let app_config = AppConfig::from_env()
        .inspect_err(|e| error!("Failed to load configuration: {e}"))?;
    info!(port = app_config.port, "configuration loaded");

    // 4. Initialize database
    let db = database::create_connection(&app_config.database_url)
        .await
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;

    database::create_tables(&db)
        .await
        .inspect(|()| info!("Database tables ready"))
        .inspect_err(|e| error!("Failed to create tables: {e}"))?;

    // 5. Seed the catalogue from config.toml (skipped when the file is
    // absent; the tables stay empty until the admin fills them)
    match catalogue::load_catalogue(&app_config.catalogue_path) {
        Ok(seeds) => catalog::seed_catalogue(&db, &seeds)
            .await
            .inspect(|()| info!("Catalogue seeded"))
            .inspect_err(|e| error!("Failed to seed catalogue: {e}"))?,
        Err(e) => warn!(
            path = %app_config.catalogue_path,
            "catalogue seed file not loaded: {e}"
        ),
    }

    // 6. Serve
    let state = AppState::new(db, PaymentEvents::new(), Arc::new(LogMailer), app_config);
    run_server(state).await
}
