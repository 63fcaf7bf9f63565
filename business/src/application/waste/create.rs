use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::waste::errors::WasteError;
use crate::domain::waste::model::WasteLog;
use crate::domain::waste::repository::WasteLogRepository;
use crate::domain::waste::use_cases::create::{CreateWasteLogParams, CreateWasteLogUseCase};

pub struct CreateWasteLogUseCaseImpl {
    pub repository: Arc<dyn WasteLogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateWasteLogUseCase for CreateWasteLogUseCaseImpl {
    async fn execute(&self, params: CreateWasteLogParams) -> Result<WasteLog, WasteError> {
        let log = WasteLog::new(params.category, params.amount)?;
        self.repository.save(&log).await?;

        self.logger.info(&format!(
            "Waste logged: {} {}{}",
            log.category, log.amount, log.unit
        ));
        Ok(log)
    }
}
