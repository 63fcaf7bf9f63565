use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::waste::errors::WasteError;
use crate::domain::waste::model::WasteLog;
use crate::domain::waste::repository::WasteLogRepository;
use crate::domain::waste::use_cases::get_all::GetAllWasteLogsUseCase;

pub struct GetAllWasteLogsUseCaseImpl {
    pub repository: Arc<dyn WasteLogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllWasteLogsUseCase for GetAllWasteLogsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<WasteLog>, WasteError> {
        self.logger.info("Getting all waste logs");
        Ok(self.repository.get_all().await?)
    }
}
