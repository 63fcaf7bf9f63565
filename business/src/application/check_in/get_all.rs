use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::check_in::errors::CheckInError;
use crate::domain::check_in::model::CheckIn;
use crate::domain::check_in::repository::CheckInRepository;
use crate::domain::check_in::use_cases::get_all::GetAllCheckInsUseCase;
use crate::domain::logger::Logger;

pub struct GetAllCheckInsUseCaseImpl {
    pub repository: Arc<dyn CheckInRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllCheckInsUseCase for GetAllCheckInsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<CheckIn>, CheckInError> {
        self.logger.info("Getting all check-ins");
        let check_ins = self.repository.get_all().await?;
        self.logger
            .info(&format!("Retrieved {} check-ins", check_ins.len()));
        Ok(check_ins)
    }
}
