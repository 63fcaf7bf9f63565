use async_trait::async_trait;

use crate::domain::menu::errors::MenuError;
use crate::domain::menu::model::MenuItem;

pub struct SetTodaysMenuParams {
    pub dish_ids: Vec<String>,
}

#[async_trait]
pub trait SetTodaysMenuUseCase: Send + Sync {
    async fn execute(&self, params: SetTodaysMenuParams) -> Result<Vec<MenuItem>, MenuError>;
}
