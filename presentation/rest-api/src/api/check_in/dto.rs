use chrono::{DateTime, NaiveDate, Utc};
use poem_openapi::{Enum, Object};

use business::domain::check_in::model::{CheckIn, CheckInSummary};
use business::domain::check_in::value_objects::{DietPreference, LunchTiming};

#[derive(Debug, Clone, Copy, PartialEq, Enum)]
pub enum DietPreferenceDto {
    #[oai(rename = "veg")]
    Veg,
    #[oai(rename = "non-veg")]
    NonVeg,
    #[oai(rename = "vegan")]
    Vegan,
}

impl From<DietPreferenceDto> for DietPreference {
    fn from(d: DietPreferenceDto) -> Self {
        match d {
            DietPreferenceDto::Veg => DietPreference::Veg,
            DietPreferenceDto::NonVeg => DietPreference::NonVeg,
            DietPreferenceDto::Vegan => DietPreference::Vegan,
        }
    }
}

impl From<DietPreference> for DietPreferenceDto {
    fn from(d: DietPreference) -> Self {
        match d {
            DietPreference::Veg => DietPreferenceDto::Veg,
            DietPreference::NonVeg => DietPreferenceDto::NonVeg,
            DietPreference::Vegan => DietPreferenceDto::Vegan,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Enum)]
pub enum LunchTimingDto {
    #[oai(rename = "12-1")]
    Noon,
    #[oai(rename = "1-2")]
    One,
    #[oai(rename = "2-3")]
    Two,
    #[oai(rename = "3-4")]
    Three,
}

impl From<LunchTimingDto> for LunchTiming {
    fn from(t: LunchTimingDto) -> Self {
        match t {
            LunchTimingDto::Noon => LunchTiming::Noon,
            LunchTimingDto::One => LunchTiming::One,
            LunchTimingDto::Two => LunchTiming::Two,
            LunchTimingDto::Three => LunchTiming::Three,
        }
    }
}

impl From<LunchTiming> for LunchTimingDto {
    fn from(t: LunchTiming) -> Self {
        match t {
            LunchTiming::Noon => LunchTimingDto::Noon,
            LunchTiming::One => LunchTimingDto::One,
            LunchTiming::Two => LunchTimingDto::Two,
            LunchTiming::Three => LunchTimingDto::Three,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreateCheckInRequest {
    /// Employee name, 2 to 50 characters
    pub name: String,
    /// Work e-mail address
    pub email: String,
    pub diet_preference: DietPreferenceDto,
    pub preferred_lunch_timing: LunchTimingDto,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateTodaysChoiceRequest {
    /// Diet the employee eats today, overriding their usual preference
    #[oai(skip_serializing_if_is_none)]
    pub todays_actual_diet: Option<DietPreferenceDto>,
    /// Whether the employee skips lunch today
    #[oai(skip_serializing_if_is_none)]
    pub skip_meal_today: Option<bool>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdatePreferencesRequest {
    /// New default diet; today's diet follows it unless the meal is skipped
    #[oai(skip_serializing_if_is_none)]
    pub diet_preference: Option<DietPreferenceDto>,
    #[oai(skip_serializing_if_is_none)]
    pub preferred_lunch_timing: Option<LunchTimingDto>,
}

#[derive(Debug, Clone, Object)]
pub struct CheckInResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub diet_preference: DietPreferenceDto,
    pub preferred_lunch_timing: LunchTimingDto,
    /// Day the check-in applies to
    pub date: NaiveDate,
    pub status: String,
    pub todays_actual_diet: DietPreferenceDto,
    pub skip_meal_today: bool,
    pub created_at: DateTime<Utc>,
}

impl From<CheckIn> for CheckInResponse {
    fn from(c: CheckIn) -> Self {
        Self {
            id: c.id.to_string(),
            name: c.name,
            email: c.email.as_str().to_string(),
            diet_preference: c.diet_preference.into(),
            preferred_lunch_timing: c.lunch_timing.into(),
            date: c.date,
            status: c.status,
            todays_actual_diet: c.todays_actual_diet.into(),
            skip_meal_today: c.skip_meal_today,
            created_at: c.created_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CheckInSummaryResponse {
    /// People eating, skipped meals excluded
    pub total_check_ins: u32,
    pub veg_count: u32,
    pub non_veg_count: u32,
    pub vegan_count: u32,
}

impl From<CheckInSummary> for CheckInSummaryResponse {
    fn from(s: CheckInSummary) -> Self {
        Self {
            total_check_ins: s.total_check_ins,
            veg_count: s.veg_count,
            non_veg_count: s.non_veg_count,
            vegan_count: s.vegan_count,
        }
    }
}
