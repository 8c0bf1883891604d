//! Application services - Use case implementations

pub mod migration_service;

pub use migration_service::{
    MigrationError, MigrationReport, MigrationService, CURRENT_SCHEMA_VERSION,
};
