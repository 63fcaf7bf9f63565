use async_trait::async_trait;

use crate::domain::waste::errors::WasteError;
use crate::domain::waste::model::WasteLog;

#[async_trait]
pub trait GetAllWasteLogsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<WasteLog>, WasteError>;
}
