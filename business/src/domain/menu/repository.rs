use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::MenuItem;

#[async_trait]
pub trait MenuRepository: Send + Sync {
    async fn get_today(&self) -> Result<Vec<MenuItem>, RepositoryError>;
    async fn replace_today(&self, items: &[MenuItem]) -> Result<(), RepositoryError>;
}
