//! In-memory document store - backs tests and the "memory" backend

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::outbound::{CreatureDocument, DocumentStorePort, StoreError};
use crate::domain::value_objects::CreatureId;

/// Non-persistent store keeping documents in a map
#[derive(Default)]
pub struct InMemoryDocumentStore {
    documents: RwLock<HashMap<CreatureId, CreatureDocument>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStorePort for InMemoryDocumentStore {
    async fn save(&self, document: &CreatureDocument) -> Result<(), StoreError> {
        self.documents
            .write()
            .await
            .insert(document.id, document.clone());
        Ok(())
    }

    async fn get(&self, id: CreatureId) -> Result<Option<CreatureDocument>, StoreError> {
        Ok(self.documents.read().await.get(&id).cloned())
    }

    async fn list_below_version(&self, version: i32) -> Result<Vec<CreatureDocument>, StoreError> {
        let documents = self.documents.read().await;
        let mut below: Vec<CreatureDocument> = documents
            .values()
            .filter(|document| document.schema_version < version)
            .cloned()
            .collect();
        below.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(below)
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.documents.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn save_get_and_list() {
        let store = InMemoryDocumentStore::new();
        let legacy = CreatureDocument::new("Basilisk", json!({}), 1);
        let current = CreatureDocument::new("Owlbear", json!({}), 2);

        store.save(&legacy).await.unwrap();
        store.save(&current).await.unwrap();

        assert_eq!(store.count().await.unwrap(), 2);
        assert_eq!(store.get(legacy.id).await.unwrap().unwrap().name, "Basilisk");

        let below = store.list_below_version(2).await.unwrap();
        assert_eq!(below.len(), 1);
        assert_eq!(below[0].name, "Basilisk");
    }
}
