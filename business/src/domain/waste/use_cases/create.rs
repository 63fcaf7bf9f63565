use async_trait::async_trait;

use crate::domain::waste::errors::WasteError;
use crate::domain::waste::model::WasteLog;
use crate::domain::waste::value_objects::WasteCategory;

pub struct CreateWasteLogParams {
    pub category: WasteCategory,
    pub amount: f64,
}

#[async_trait]
pub trait CreateWasteLogUseCase: Send + Sync {
    async fn execute(&self, params: CreateWasteLogParams) -> Result<WasteLog, WasteError>;
}
