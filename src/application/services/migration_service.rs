//! Migration service - batch upgrade pass over persisted creature documents
//!
//! Runs once per store, at load time or explicit migration time. Each
//! document is upgraded independently; malformed legacy data degrades to
//! partial structured output or the free-text fallback, never an aborted
//! pass.

use std::sync::Arc;

use chrono::Utc;
use futures_util::{stream, StreamExt};

use crate::application::ports::outbound::{CreatureDocument, DocumentStorePort, StoreError};
use crate::domain::migration::migrate_senses;
use crate::domain::value_objects::SenseTypes;

/// Schema version written by this upgrade pass
pub const CURRENT_SCHEMA_VERSION: i32 = 2;

const DEFAULT_PARALLELISM: usize = 4;

/// Errors that can occur while driving a migration pass
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Outcome tally for one migration pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationReport {
    /// Documents in the store when the pass started
    pub scanned: usize,
    /// Documents upgraded and persisted
    pub migrated: usize,
    /// Documents already at the current schema version
    pub skipped: usize,
    /// Documents whose upgraded form could not be persisted
    pub failed: usize,
}

enum DocumentOutcome {
    Migrated,
    Failed,
}

/// Service that upgrades legacy creature documents to the current schema
pub struct MigrationService {
    store: Arc<dyn DocumentStorePort>,
    sense_types: SenseTypes,
    parallelism: usize,
}

impl MigrationService {
    pub fn new(store: Arc<dyn DocumentStorePort>, sense_types: SenseTypes) -> Self {
        Self {
            store,
            sense_types,
            parallelism: DEFAULT_PARALLELISM,
        }
    }

    /// Bound the number of documents migrated concurrently
    pub fn with_parallelism(mut self, parallelism: usize) -> Self {
        self.parallelism = parallelism.max(1);
        self
    }

    /// Run one upgrade pass over every document below the current version
    pub async fn run(&self) -> Result<MigrationReport, MigrationError> {
        let total = self.store.count().await?;
        let pending = self.store.list_below_version(CURRENT_SCHEMA_VERSION).await?;

        let mut report = MigrationReport {
            scanned: total,
            skipped: total.saturating_sub(pending.len()),
            ..MigrationReport::default()
        };

        tracing::info!(
            scanned = report.scanned,
            pending = pending.len(),
            target_version = CURRENT_SCHEMA_VERSION,
            "Starting creature document migration"
        );

        let mut outcomes = stream::iter(pending)
            .map(|document| self.migrate_document(document))
            .buffer_unordered(self.parallelism);

        while let Some(outcome) = outcomes.next().await {
            match outcome {
                DocumentOutcome::Migrated => report.migrated += 1,
                DocumentOutcome::Failed => report.failed += 1,
            }
        }

        tracing::info!(
            migrated = report.migrated,
            skipped = report.skipped,
            failed = report.failed,
            "Creature document migration complete"
        );

        Ok(report)
    }

    async fn migrate_document(&self, mut document: CreatureDocument) -> DocumentOutcome {
        migrate_senses(&mut document.data, &self.sense_types);
        document.schema_version = CURRENT_SCHEMA_VERSION;
        document.updated_at = Utc::now();

        match self.store.save(&document).await {
            Ok(()) => {
                tracing::debug!(id = %document.id, name = %document.name, "Migrated creature document");
                DocumentOutcome::Migrated
            }
            Err(error) => {
                tracing::warn!(id = %document.id, error = %error, "Failed to persist migrated document");
                DocumentOutcome::Failed
            }
        }
    }
}
