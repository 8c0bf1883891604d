//! Outbound ports - Interfaces that the application requires from external systems

mod document_store;

pub use document_store::{CreatureDocument, DocumentStorePort, StoreError};
