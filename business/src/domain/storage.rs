use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

/// Storage keys shared by every key-value backed repository.
pub mod keys {
    pub const CHECK_INS: &str = "smartserve_checkins_log";
    pub const TODAYS_MENU: &str = "smartserve_todays_menu";
    pub const WASTE_LOGS: &str = "smartserve_wastelogs_log";
    pub const DISH_WASTE_LOGS: &str = "smartserve_kitchen_dish_waste_log";
}

/// Computes the next value of a key from its current one.
pub type ValueUpdate<'a> =
    &'a (dyn Fn(Option<String>) -> Result<String, RepositoryError> + Send + Sync);

/// Port for the key → string store that backs all application state.
///
/// Values are opaque strings (JSON documents in practice).
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError>;
    async fn remove(&self, key: &str) -> Result<(), RepositoryError>;

    /// Read-modify-write of a single key. No other write to `key` may land
    /// between the read and the write.
    async fn update(&self, key: &str, apply: ValueUpdate<'_>) -> Result<(), RepositoryError>;
}
