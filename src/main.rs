//! Bestiary Engine - Legacy creature document migration runner
//!
//! The runner performs a one-time upgrade pass:
//! - Loads creature documents from the configured store
//! - Parses legacy free-text sense descriptions into the structured schema
//! - Stamps upgraded documents with the current schema version

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bestiary_engine::application::services::{MigrationService, CURRENT_SCHEMA_VERSION};
use bestiary_engine::infrastructure::config::AppConfig;
use bestiary_engine::infrastructure::persistence::create_document_store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bestiary_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Bestiary Engine migration runner");

    // Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded");
    tracing::info!("  Store backend: {}", config.store_backend);
    tracing::info!("  Database: {}", config.database_path);
    tracing::info!("  Target schema version: {}", CURRENT_SCHEMA_VERSION);

    // Initialize the document store
    let store = Arc::new(create_document_store(&config).await?);

    // Run the upgrade pass
    let service = MigrationService::new(store, config.sense_types())
        .with_parallelism(config.migration_parallelism);
    let report = service.run().await?;

    tracing::info!(
        scanned = report.scanned,
        migrated = report.migrated,
        skipped = report.skipped,
        failed = report.failed,
        "Migration pass finished"
    );

    if report.failed > 0 {
        tracing::warn!(
            "{} document(s) could not be persisted; re-run once the store is healthy",
            report.failed
        );
    }

    Ok(())
}
