//! Document store port - persistence interface for creature documents
//!
//! The application layer depends on this trait, not on a concrete
//! database adapter.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::CreatureId;

/// A persisted creature document: schema-versioned JSON plus metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureDocument {
    pub id: CreatureId,
    pub name: String,
    /// Document body in the creature schema layout
    pub data: serde_json::Value,
    pub schema_version: i32,
    pub updated_at: DateTime<Utc>,
}

impl CreatureDocument {
    pub fn new(name: impl Into<String>, data: serde_json::Value, schema_version: i32) -> Self {
        Self {
            id: CreatureId::new(),
            name: name.into(),
            data,
            schema_version,
            updated_at: Utc::now(),
        }
    }
}

/// Errors surfaced by document store adapters
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(String),

    #[error("malformed document {id}: {reason}")]
    Malformed { id: String, reason: String },
}

/// Port for loading and saving creature documents
#[async_trait]
pub trait DocumentStorePort: Send + Sync {
    /// Insert or replace a document
    async fn save(&self, document: &CreatureDocument) -> Result<(), StoreError>;

    /// Get a document by id
    async fn get(&self, id: CreatureId) -> Result<Option<CreatureDocument>, StoreError>;

    /// List documents persisted below the given schema version
    async fn list_below_version(&self, version: i32) -> Result<Vec<CreatureDocument>, StoreError>;

    /// Total number of stored documents
    async fn count(&self) -> Result<usize, StoreError>;
}
