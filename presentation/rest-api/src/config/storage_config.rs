use std::env;
use std::sync::Arc;

use business::domain::storage::KeyValueStore;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use persistence::key_value::memory::InMemoryKeyValueStore;
use persistence::key_value::postgres::PostgresKeyValueStore;

use super::error::ConfigError;

const DEFAULT_MIGRATIONS_PATH: &str = "./migrations";

#[derive(Debug, Clone, PartialEq)]
pub enum StorageConfig {
    Memory,
    Postgres {
        database_url: String,
        migrations_path: String,
    },
}

impl StorageConfig {
    /// Load storage configuration from environment variables
    ///
    /// Environment variables:
    /// - STORAGE_BACKEND: "memory" or "postgres" (default: "memory")
    /// - DATABASE_URL: PostgreSQL connection string (required for postgres)
    /// - MIGRATIONS_PATH: SQL migrations directory (default: "./migrations")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            env::var("STORAGE_BACKEND").ok(),
            env::var("DATABASE_URL").ok(),
            env::var("MIGRATIONS_PATH").ok(),
        )
    }

    fn from_vars(
        backend: Option<String>,
        database_url: Option<String>,
        migrations_path: Option<String>,
    ) -> Result<Self, ConfigError> {
        match backend.as_deref().map(str::trim).unwrap_or("memory") {
            "memory" => Ok(StorageConfig::Memory),
            "postgres" => Ok(StorageConfig::Postgres {
                database_url: database_url
                    .ok_or(ConfigError::MissingVariable("DATABASE_URL"))?,
                migrations_path: migrations_path
                    .unwrap_or_else(|| DEFAULT_MIGRATIONS_PATH.to_string()),
            }),
            other => Err(ConfigError::InvalidValue {
                name: "STORAGE_BACKEND",
                value: other.to_string(),
            }),
        }
    }

    /// Opens the configured key-value store, running migrations for Postgres.
    pub async fn init_store(&self) -> anyhow::Result<Arc<dyn KeyValueStore>> {
        match self {
            StorageConfig::Memory => {
                tracing::warn!("Using in-memory storage, data is lost on restart");
                Ok(Arc::new(InMemoryKeyValueStore::new()))
            }
            StorageConfig::Postgres {
                database_url,
                migrations_path,
            } => {
                let pool = create_postgres_pool(&DatabaseConfig::new(database_url.clone())).await?;
                run_migrations(&pool, migrations_path).await?;
                Ok(Arc::new(PostgresKeyValueStore::new(pool)))
            }
        }
    }
}
