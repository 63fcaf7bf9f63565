use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::DishWasteLog;

#[async_trait]
pub trait DishWasteLogRepository: Send + Sync {
    /// All stored dish waste logs, newest first.
    async fn get_all(&self) -> Result<Vec<DishWasteLog>, RepositoryError>;
    async fn save(&self, log: &DishWasteLog) -> Result<(), RepositoryError>;
}
