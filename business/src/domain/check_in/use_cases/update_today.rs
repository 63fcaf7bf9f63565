use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::check_in::errors::CheckInError;
use crate::domain::check_in::model::CheckIn;
use crate::domain::check_in::value_objects::DietPreference;

pub struct UpdateTodaysChoiceParams {
    pub id: Uuid,
    pub todays_actual_diet: Option<DietPreference>,
    pub skip_meal_today: Option<bool>,
}

#[async_trait]
pub trait UpdateTodaysChoiceUseCase: Send + Sync {
    async fn execute(&self, params: UpdateTodaysChoiceParams) -> Result<CheckIn, CheckInError>;
}
