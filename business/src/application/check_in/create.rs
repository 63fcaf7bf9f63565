use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::check_in::errors::CheckInError;
use crate::domain::check_in::model::{CheckIn, NewCheckInProps};
use crate::domain::check_in::repository::CheckInRepository;
use crate::domain::check_in::use_cases::create::{CreateCheckInParams, CreateCheckInUseCase};
use crate::domain::logger::Logger;

pub struct CreateCheckInUseCaseImpl {
    pub repository: Arc<dyn CheckInRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateCheckInUseCase for CreateCheckInUseCaseImpl {
    async fn execute(&self, params: CreateCheckInParams) -> Result<CheckIn, CheckInError> {
        self.logger.info(&format!(
            "Checking in employee with {} preference for {}",
            params.diet_preference, params.lunch_timing
        ));

        let check_in = CheckIn::new(NewCheckInProps {
            name: params.name,
            email: params.email,
            diet_preference: params.diet_preference,
            lunch_timing: params.lunch_timing,
        })?;
        self.repository.save(&check_in).await?;

        self.logger.info(&format!("Check-in created: {}", check_in.id));
        Ok(check_in)
    }
}
