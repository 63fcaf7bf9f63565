//! JSON-array documents stored under a single key.
//!
//! Reads are lenient: a missing key, an unparsable document or a malformed
//! element never fails the read, the bad data is skipped and logged.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use business::domain::errors::RepositoryError;
use business::domain::storage::KeyValueStore;

/// Maximum number of entries kept in an append-style log.
pub const MAX_LOG_ENTRIES: usize = 50;

pub async fn load<E: DeserializeOwned>(
    kv: &dyn KeyValueStore,
    key: &str,
) -> Result<Vec<E>, RepositoryError> {
    let raw = kv.get(key).await?;
    Ok(decode(key, raw.as_deref()))
}

fn decode<E: DeserializeOwned>(key: &str, raw: Option<&str>) -> Vec<E> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    let items = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items,
        Ok(_) => {
            tracing::warn!("Stored value for {} is not a list, ignoring it", key);
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!("Stored value for {} is not valid JSON: {}", key, e);
            return Vec::new();
        }
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<E>(item) {
            Ok(entity) => Some(entity),
            Err(e) => {
                tracing::warn!("Skipping malformed entry under {}: {}", key, e);
                None
            }
        })
        .collect()
}

pub async fn store<E: Serialize>(
    kv: &dyn KeyValueStore,
    key: &str,
    entities: &[E],
) -> Result<(), RepositoryError> {
    let raw = serde_json::to_string(entities).map_err(|_| RepositoryError::Serialization)?;
    kv.set(key, &raw).await
}

/// Loads the list under `key`, lets `change` edit it and writes it back as one
/// atomic step of the store.
pub async fn update<E, F>(
    kv: &dyn KeyValueStore,
    key: &str,
    change: F,
) -> Result<(), RepositoryError>
where
    E: Serialize + DeserializeOwned,
    F: Fn(&mut Vec<E>) + Send + Sync,
{
    kv.update(key, &|current| {
        let mut entities: Vec<E> = decode(key, current.as_deref());
        change(&mut entities);
        serde_json::to_string(&entities).map_err(|_| RepositoryError::Serialization)
    })
    .await
}

/// Puts `entity` at the front of the list, replacing any entry with the same id,
/// then trims the list to [`MAX_LOG_ENTRIES`].
pub fn upsert_front<E>(entries: &mut Vec<E>, entity: E, same_id: impl Fn(&E) -> bool) {
    match entries.iter().position(same_id) {
        Some(index) => entries[index] = entity,
        None => {
            entries.insert(0, entity);
            entries.truncate(MAX_LOG_ENTRIES);
        }
    }
}
