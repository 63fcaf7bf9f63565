use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::dish_waste::errors::DishWasteError;
use crate::domain::dish_waste::model::DishWasteLog;
use crate::domain::dish_waste::repository::DishWasteLogRepository;
use crate::domain::dish_waste::use_cases::get_all::GetAllDishWasteLogsUseCase;
use crate::domain::logger::Logger;

pub struct GetAllDishWasteLogsUseCaseImpl {
    pub repository: Arc<dyn DishWasteLogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllDishWasteLogsUseCase for GetAllDishWasteLogsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<DishWasteLog>, DishWasteError> {
        let logs = self.repository.get_all().await?;
        self.logger
            .debug(&format!("Fetched {} dish waste logs", logs.len()));
        Ok(logs)
    }
}
