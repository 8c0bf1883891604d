//! SQLite document store - durable persistence for creature documents

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::application::ports::outbound::{CreatureDocument, DocumentStorePort, StoreError};
use crate::domain::value_objects::CreatureId;

pub struct SqliteDocumentStore {
    pool: SqlitePool,
}

impl SqliteDocumentStore {
    pub async fn new(pool: SqlitePool) -> Result<Self, sqlx::Error> {
        // Create table if not exists
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS creature_documents (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                data TEXT NOT NULL,
                schema_version INTEGER NOT NULL DEFAULT 1,
                updated_at TEXT NOT NULL
            )
        "#,
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

type DocumentRow = (String, String, String, i32, String);

fn decode_row(row: DocumentRow) -> Result<CreatureDocument, StoreError> {
    let (id, name, data, schema_version, updated_at) = row;

    let malformed = |reason: String| StoreError::Malformed {
        id: id.clone(),
        reason,
    };

    let uuid = Uuid::parse_str(&id).map_err(|e| malformed(e.to_string()))?;
    let data = serde_json::from_str(&data).map_err(|e| malformed(e.to_string()))?;
    let updated_at = DateTime::parse_from_rfc3339(&updated_at)
        .map_err(|e| malformed(e.to_string()))?
        .with_timezone(&Utc);

    Ok(CreatureDocument {
        id: CreatureId::from_uuid(uuid),
        name,
        data,
        schema_version,
        updated_at,
    })
}

#[async_trait]
impl DocumentStorePort for SqliteDocumentStore {
    async fn save(&self, document: &CreatureDocument) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT OR REPLACE INTO creature_documents (id, name, data, schema_version, updated_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(document.id.to_string())
        .bind(&document.name)
        .bind(document.data.to_string())
        .bind(document.schema_version)
        .bind(document.updated_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(())
    }

    async fn get(&self, id: CreatureId) -> Result<Option<CreatureDocument>, StoreError> {
        let row: Option<DocumentRow> = sqlx::query_as(
            "SELECT id, name, data, schema_version, updated_at FROM creature_documents WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        row.map(decode_row).transpose()
    }

    async fn list_below_version(&self, version: i32) -> Result<Vec<CreatureDocument>, StoreError> {
        let rows: Vec<DocumentRow> = sqlx::query_as(
            "SELECT id, name, data, schema_version, updated_at FROM creature_documents WHERE schema_version < ? ORDER BY name",
        )
        .bind(version)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        rows.into_iter().map(decode_row).collect()
    }

    async fn count(&self) -> Result<usize, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM creature_documents")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        Ok(count as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn store() -> SqliteDocumentStore {
        // A single connection keeps every query on the same :memory: database
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        SqliteDocumentStore::new(pool).await.unwrap()
    }

    #[tokio::test]
    async fn save_and_get_round_trip() {
        let store = store().await;
        let document = CreatureDocument::new(
            "Owlbear",
            json!({ "traits": { "senses": "Darkvision 60 ft" } }),
            1,
        );

        store.save(&document).await.unwrap();
        let loaded = store.get(document.id).await.unwrap().unwrap();

        assert_eq!(loaded.id, document.id);
        assert_eq!(loaded.name, "Owlbear");
        assert_eq!(loaded.data, document.data);
        assert_eq!(loaded.schema_version, 1);
    }

    #[tokio::test]
    async fn get_missing_document_returns_none() {
        let store = store().await;
        assert!(store.get(CreatureId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_below_version_filters_current_documents() {
        let store = store().await;
        store
            .save(&CreatureDocument::new("Basilisk", json!({}), 1))
            .await
            .unwrap();
        store
            .save(&CreatureDocument::new("Owlbear", json!({}), 2))
            .await
            .unwrap();

        let below = store.list_below_version(2).await.unwrap();
        assert_eq!(below.len(), 1);
        assert_eq!(below[0].name, "Basilisk");
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn save_replaces_existing_document() {
        let store = store().await;
        let mut document = CreatureDocument::new("Ghoul", json!({}), 1);
        store.save(&document).await.unwrap();

        document.schema_version = 2;
        document.data = json!({ "attributes": { "senses": { "darkvision": 60.0 } } });
        store.save(&document).await.unwrap();

        let loaded = store.get(document.id).await.unwrap().unwrap();
        assert_eq!(loaded.schema_version, 2);
        assert_eq!(store.count().await.unwrap(), 1);
    }
}
