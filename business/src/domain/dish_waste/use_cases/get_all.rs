use async_trait::async_trait;

use crate::domain::dish_waste::errors::DishWasteError;
use crate::domain::dish_waste::model::DishWasteLog;

#[async_trait]
pub trait GetAllDishWasteLogsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<DishWasteLog>, DishWasteError>;
}
