use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::check_in::errors::CheckInError;
use crate::domain::check_in::model::CheckIn;
use crate::domain::check_in::value_objects::{DietPreference, LunchTiming};

pub struct UpdatePreferencesParams {
    pub id: Uuid,
    pub diet_preference: Option<DietPreference>,
    pub lunch_timing: Option<LunchTiming>,
}

#[async_trait]
pub trait UpdatePreferencesUseCase: Send + Sync {
    async fn execute(&self, params: UpdatePreferencesParams) -> Result<CheckIn, CheckInError>;
}
