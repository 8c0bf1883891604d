//! Store factory - Creates document store instances based on configuration
//!
//! Backends are selected at runtime ("memory" or "sqlite") while the
//! application only ever sees the port trait.

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;

use crate::application::ports::outbound::{CreatureDocument, DocumentStorePort, StoreError};
use crate::domain::value_objects::CreatureId;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::persistence::{InMemoryDocumentStore, SqliteDocumentStore};

/// Enum wrapper for store backends to enable runtime selection
pub enum DocumentStoreBackend {
    Memory(InMemoryDocumentStore),
    Sqlite(SqliteDocumentStore),
}

#[async_trait]
impl DocumentStorePort for DocumentStoreBackend {
    async fn save(&self, document: &CreatureDocument) -> Result<(), StoreError> {
        match self {
            DocumentStoreBackend::Memory(store) => store.save(document).await,
            DocumentStoreBackend::Sqlite(store) => store.save(document).await,
        }
    }

    async fn get(&self, id: CreatureId) -> Result<Option<CreatureDocument>, StoreError> {
        match self {
            DocumentStoreBackend::Memory(store) => store.get(id).await,
            DocumentStoreBackend::Sqlite(store) => store.get(id).await,
        }
    }

    async fn list_below_version(&self, version: i32) -> Result<Vec<CreatureDocument>, StoreError> {
        match self {
            DocumentStoreBackend::Memory(store) => store.list_below_version(version).await,
            DocumentStoreBackend::Sqlite(store) => store.list_below_version(version).await,
        }
    }

    async fn count(&self) -> Result<usize, StoreError> {
        match self {
            DocumentStoreBackend::Memory(store) => store.count().await,
            DocumentStoreBackend::Sqlite(store) => store.count().await,
        }
    }
}

/// Create the document store selected by configuration
pub async fn create_document_store(config: &AppConfig) -> Result<DocumentStoreBackend> {
    match config.store_backend.as_str() {
        "memory" => Ok(DocumentStoreBackend::Memory(InMemoryDocumentStore::new())),
        "sqlite" => {
            // Ensure the database directory exists
            if let Some(parent) = std::path::Path::new(&config.database_path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .context("Failed to create document database directory")?;
                }
            }

            let options = SqliteConnectOptions::new()
                .filename(&config.database_path)
                .create_if_missing(true);
            let pool = SqlitePool::connect_with(options)
                .await
                .context("Failed to connect to SQLite document database")?;
            tracing::info!(
                "Connected to SQLite document database: {}",
                config.database_path
            );

            let store = SqliteDocumentStore::new(pool)
                .await
                .context("Failed to initialize creature document table")?;
            Ok(DocumentStoreBackend::Sqlite(store))
        }
        backend => anyhow::bail!("Unsupported document store backend: {}", backend),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(backend: &str) -> AppConfig {
        AppConfig {
            store_backend: backend.to_string(),
            database_path: String::new(),
            migration_parallelism: 1,
            extra_sense_types: Vec::new(),
        }
    }

    #[tokio::test]
    async fn memory_backend_is_created() {
        let store = create_document_store(&config("memory")).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn unknown_backend_is_rejected() {
        assert!(create_document_store(&config("postgres")).await.is_err());
    }
}
