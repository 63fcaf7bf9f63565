use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::storage::{KeyValueStore, ValueUpdate};

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), RepositoryError> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn update(&self, key: &str, apply: ValueUpdate<'_>) -> Result<(), RepositoryError> {
        let mut entries = self.entries.write().await;
        let next = apply(entries.get(key).cloned())?;
        entries.insert(key.to_string(), next);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_round_trip_and_remove_values() {
        let store = InMemoryKeyValueStore::new();

        assert_eq!(store.get("menu").await.unwrap(), None);

        store.set("menu", "[]").await.unwrap();
        store.set("menu", "[1]").await.unwrap();
        assert_eq!(store.get("menu").await.unwrap().as_deref(), Some("[1]"));

        store.remove("menu").await.unwrap();
        assert_eq!(store.get("menu").await.unwrap(), None);
    }

    #[tokio::test]
    async fn should_leave_value_untouched_when_update_fails() {
        let store = InMemoryKeyValueStore::new();
        store.set("menu", "[1]").await.unwrap();

        let result = store
            .update("menu", &|_| Err(RepositoryError::Serialization))
            .await;

        assert!(matches!(result, Err(RepositoryError::Serialization)));
        assert_eq!(store.get("menu").await.unwrap().as_deref(), Some("[1]"));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn should_apply_every_concurrent_update() {
        let store = std::sync::Arc::new(InMemoryKeyValueStore::new());

        let handles: Vec<_> = (0..50)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .update("counter", &|current| {
                            let n: u32 = current.as_deref().unwrap_or("0").parse().unwrap();
                            Ok((n + 1).to_string())
                        })
                        .await
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(store.get("counter").await.unwrap().as_deref(), Some("50"));
    }
}
