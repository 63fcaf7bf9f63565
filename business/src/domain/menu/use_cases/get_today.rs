use async_trait::async_trait;

use crate::domain::menu::errors::MenuError;
use crate::domain::menu::model::MenuItem;

#[async_trait]
pub trait GetTodaysMenuUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<MenuItem>, MenuError>;
}
