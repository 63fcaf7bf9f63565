use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::WasteLog;

#[async_trait]
pub trait WasteLogRepository: Send + Sync {
    /// All stored waste logs, newest first.
    async fn get_all(&self) -> Result<Vec<WasteLog>, RepositoryError>;
    async fn save(&self, log: &WasteLog) -> Result<(), RepositoryError>;
}
