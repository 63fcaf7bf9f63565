use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use business::domain::errors::RepositoryError;
use business::domain::storage::{KeyValueStore, ValueUpdate};

const UPSERT: &str = r#"INSERT INTO kv_entries (key, value, updated_at)
    VALUES ($1, $2, $3)
    ON CONFLICT (key) DO UPDATE SET
        value = EXCLUDED.value,
        updated_at = EXCLUDED.updated_at"#;

#[derive(Debug, FromRow)]
pub struct KeyValueEntity {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

pub struct PostgresKeyValueStore {
    pool: PgPool,
}

impl PostgresKeyValueStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl KeyValueStore for PostgresKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let entity = sqlx::query_as::<_, KeyValueEntity>(
            "SELECT key, value, updated_at FROM kv_entries WHERE key = $1",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to read key {}: {}", key, e);
            RepositoryError::DatabaseError
        })?;

        Ok(entity.map(|e| e.value))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        sqlx::query(UPSERT)
            .bind(key)
            .bind(value)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to write key {}: {}", key, e);
                RepositoryError::DatabaseError
            })?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM kv_entries WHERE key = $1")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn update(&self, key: &str, apply: ValueUpdate<'_>) -> Result<(), RepositoryError> {
        let db_error = |e: sqlx::Error| {
            tracing::error!("Failed to update key {}: {}", key, e);
            RepositoryError::DatabaseError
        };

        let mut tx = self.pool.begin().await.map_err(db_error)?;

        // Row locks cannot cover a key that has no row yet
        sqlx::query("SELECT pg_advisory_xact_lock(hashtext($1))")
            .bind(key)
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;

        let current: Option<String> =
            sqlx::query_scalar("SELECT value FROM kv_entries WHERE key = $1 FOR UPDATE")
                .bind(key)
                .fetch_optional(&mut *tx)
                .await
                .map_err(db_error)?;

        let next = apply(current)?;

        sqlx::query(UPSERT)
            .bind(key)
            .bind(&next)
            .bind(Utc::now())
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;

        tx.commit().await.map_err(db_error)
    }
}
