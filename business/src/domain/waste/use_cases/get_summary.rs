use async_trait::async_trait;

use crate::domain::waste::errors::WasteError;
use crate::domain::waste::model::WasteSummary;

#[async_trait]
pub trait GetWasteSummaryUseCase: Send + Sync {
    async fn execute(&self) -> Result<WasteSummary, WasteError>;
}
