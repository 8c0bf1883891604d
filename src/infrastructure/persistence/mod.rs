//! Document store implementations - Infrastructure adapters for the store port

mod factory;
mod memory_document_store;
mod sqlite_document_store;

pub use factory::{create_document_store, DocumentStoreBackend};
pub use memory_document_store::InMemoryDocumentStore;
pub use sqlite_document_store::SqliteDocumentStore;
