use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::check_in::model::CheckIn;
use business::domain::check_in::value_objects::{DietPreference, LunchTiming};
use business::domain::shared::value_objects::Email;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInEntity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub diet_preference: DietPreference,
    pub preferred_lunch_timing: LunchTiming,
    pub date: NaiveDate,
    pub status: String,
    pub todays_actual_diet: DietPreference,
    pub skip_meal_today: bool,
    pub created_at: DateTime<Utc>,
}

impl CheckInEntity {
    pub fn from_domain(check_in: &CheckIn) -> Self {
        Self {
            id: check_in.id,
            name: check_in.name.clone(),
            email: check_in.email.as_str().to_string(),
            diet_preference: check_in.diet_preference,
            preferred_lunch_timing: check_in.lunch_timing,
            date: check_in.date,
            status: check_in.status.clone(),
            todays_actual_diet: check_in.todays_actual_diet,
            skip_meal_today: check_in.skip_meal_today,
            created_at: check_in.created_at,
        }
    }

    pub fn into_domain(self) -> CheckIn {
        CheckIn::from_repository(
            self.id,
            self.name,
            Email::from_repository(self.email),
            self.diet_preference,
            self.preferred_lunch_timing,
            self.date,
            self.status,
            self.todays_actual_diet,
            self.skip_meal_today,
            self.created_at,
        )
    }
}
