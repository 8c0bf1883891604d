//! Application configuration

use std::env;

use anyhow::{Context, Result};

use crate::domain::value_objects::SenseTypes;

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Document store backend ("sqlite" or "memory")
    pub store_backend: String,
    /// SQLite database path
    pub database_path: String,
    /// Number of documents migrated concurrently
    pub migration_parallelism: usize,
    /// Extra recognized sense types beyond the standard vocabulary
    pub extra_sense_types: Vec<String>,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            store_backend: env::var("BESTIARY_STORE_BACKEND")
                .unwrap_or_else(|_| "sqlite".to_string()),
            database_path: env::var("BESTIARY_DATABASE_PATH")
                .unwrap_or_else(|_| "data/bestiary.db".to_string()),
            migration_parallelism: env::var("BESTIARY_MIGRATION_PARALLELISM")
                .unwrap_or_else(|_| "4".to_string())
                .parse()
                .context("BESTIARY_MIGRATION_PARALLELISM must be a positive integer")?,
            extra_sense_types: env::var("BESTIARY_SENSE_TYPES")
                .map(|raw| {
                    raw.split(',')
                        .map(str::trim)
                        .filter(|key| !key.is_empty())
                        .map(str::to_lowercase)
                        .collect()
                })
                .unwrap_or_default(),
        })
    }

    /// The recognized sense-type registry for this deployment
    pub fn sense_types(&self) -> SenseTypes {
        SenseTypes::standard().with_extensions(self.extra_sense_types.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_includes_configured_extensions() {
        let config = AppConfig {
            store_backend: "memory".to_string(),
            database_path: String::new(),
            migration_parallelism: 1,
            extra_sense_types: vec!["scent".to_string()],
        };

        let types = config.sense_types();
        assert!(types.contains("scent"));
        assert!(types.contains("darkvision"));
    }
}
