use async_trait::async_trait;

use crate::domain::check_in::errors::CheckInError;
use crate::domain::check_in::model::CheckIn;
use crate::domain::check_in::value_objects::{DietPreference, LunchTiming};

pub struct CreateCheckInParams {
    pub name: String,
    pub email: String,
    pub diet_preference: DietPreference,
    pub lunch_timing: LunchTiming,
}

#[async_trait]
pub trait CreateCheckInUseCase: Send + Sync {
    async fn execute(&self, params: CreateCheckInParams) -> Result<CheckIn, CheckInError>;
}
