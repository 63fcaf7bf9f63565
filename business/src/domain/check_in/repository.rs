use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::CheckIn;

#[async_trait]
pub trait CheckInRepository: Send + Sync {
    /// All stored check-ins, newest first.
    async fn get_all(&self) -> Result<Vec<CheckIn>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<CheckIn, RepositoryError>;
    /// Inserts a new check-in at the front, or replaces the one with the same id.
    async fn save(&self, check_in: &CheckIn) -> Result<(), RepositoryError>;
}
