use async_trait::async_trait;

use crate::domain::check_in::errors::CheckInError;
use crate::domain::check_in::model::CheckIn;

#[async_trait]
pub trait GetAllCheckInsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<CheckIn>, CheckInError>;
}
