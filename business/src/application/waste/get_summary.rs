use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::waste::errors::WasteError;
use crate::domain::waste::model::WasteSummary;
use crate::domain::waste::repository::WasteLogRepository;
use crate::domain::waste::use_cases::get_summary::GetWasteSummaryUseCase;

pub struct GetWasteSummaryUseCaseImpl {
    pub repository: Arc<dyn WasteLogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetWasteSummaryUseCase for GetWasteSummaryUseCaseImpl {
    async fn execute(&self) -> Result<WasteSummary, WasteError> {
        let logs = self.repository.get_all().await?;
        let summary = WasteSummary::from_logs(&logs);
        self.logger.debug(&format!(
            "Waste summary: food={}kg water={}L over {} entries",
            summary.food_kg, summary.water_liters, summary.entries
        ));
        Ok(summary)
    }
}
