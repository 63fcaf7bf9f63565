use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use super::errors::CheckInError;
use super::value_objects::{DietPreference, LunchTiming};
use crate::domain::shared::value_objects::Email;

pub const CHECKED_IN_STATUS: &str = "Checked-in";

const NAME_MIN_CHARS: usize = 2;
const NAME_MAX_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct CheckIn {
    pub id: Uuid,
    pub name: String,
    pub email: Email,
    pub diet_preference: DietPreference,
    pub lunch_timing: LunchTiming,
    pub date: NaiveDate,
    pub status: String,
    /// What the employee actually eats today; starts equal to `diet_preference`.
    pub todays_actual_diet: DietPreference,
    pub skip_meal_today: bool,
    pub created_at: DateTime<Utc>,
}

pub struct NewCheckInProps {
    pub name: String,
    pub email: String,
    pub diet_preference: DietPreference,
    pub lunch_timing: LunchTiming,
}

impl CheckIn {
    pub fn new(props: NewCheckInProps) -> Result<Self, CheckInError> {
        let name = props.name.trim().to_string();
        let name_len = name.chars().count();
        if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&name_len) {
            return Err(CheckInError::NameInvalid);
        }

        let email = Email::parse(&props.email).ok_or(CheckInError::EmailInvalid)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            email,
            diet_preference: props.diet_preference,
            lunch_timing: props.lunch_timing,
            date: now.date_naive(),
            status: CHECKED_IN_STATUS.to_string(),
            todays_actual_diet: props.diet_preference,
            skip_meal_today: false,
            created_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        name: String,
        email: Email,
        diet_preference: DietPreference,
        lunch_timing: LunchTiming,
        date: NaiveDate,
        status: String,
        todays_actual_diet: DietPreference,
        skip_meal_today: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            diet_preference,
            lunch_timing,
            date,
            status,
            todays_actual_diet,
            skip_meal_today,
            created_at,
        }
    }

    pub fn update_today(&mut self, diet: Option<DietPreference>, skip_meal: Option<bool>) {
        if let Some(diet) = diet {
            self.todays_actual_diet = diet;
        }
        if let Some(skip) = skip_meal {
            self.skip_meal_today = skip;
        }
    }

    /// Changes the standing preferences. Unless today's meal is skipped,
    /// today's diet follows a new default diet.
    pub fn update_preferences(
        &mut self,
        diet: Option<DietPreference>,
        timing: Option<LunchTiming>,
    ) {
        if let Some(diet) = diet {
            self.diet_preference = diet;
            if !self.skip_meal_today {
                self.todays_actual_diet = diet;
            }
        }
        if let Some(timing) = timing {
            self.lunch_timing = timing;
        }
    }
}

/// Head counts the kitchen plans from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckInSummary {
    pub total_check_ins: u32,
    pub veg_count: u32,
    pub non_veg_count: u32,
    pub vegan_count: u32,
}

impl CheckInSummary {
    /// Counts everyone eating today by their actual diet. Skipped meals are left out.
    pub fn from_check_ins<'a>(check_ins: impl IntoIterator<Item = &'a CheckIn>) -> Self {
        check_ins
            .into_iter()
            .filter(|c| !c.skip_meal_today)
            .fold(Self::default(), |mut summary, check_in| {
                summary.total_check_ins += 1;
                match check_in.todays_actual_diet {
                    DietPreference::Veg => summary.veg_count += 1,
                    DietPreference::NonVeg => summary.non_veg_count += 1,
                    DietPreference::Vegan => summary.vegan_count += 1,
                }
                summary
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(name: &str, email: &str, diet: DietPreference) -> NewCheckInProps {
        NewCheckInProps {
            name: name.to_string(),
            email: email.to_string(),
            diet_preference: diet,
            lunch_timing: LunchTiming::One,
        }
    }

    fn check_in(diet: DietPreference) -> CheckIn {
        CheckIn::new(props("Asha", "asha@example.com", diet)).unwrap()
    }

    #[test]
    fn should_create_check_in_when_valid() {
        let result = CheckIn::new(props("  Asha Rao ", "asha@example.com", DietPreference::Veg));

        assert!(result.is_ok());
        let check_in = result.unwrap();
        assert_eq!(check_in.name, "Asha Rao");
        assert_eq!(check_in.status, CHECKED_IN_STATUS);
        assert_eq!(check_in.todays_actual_diet, DietPreference::Veg);
        assert!(!check_in.skip_meal_today);
        assert_eq!(check_in.date, Utc::now().date_naive());
    }

    #[test]
    fn should_reject_short_name() {
        let result = CheckIn::new(props("A", "a@example.com", DietPreference::Veg));
        assert!(matches!(result.unwrap_err(), CheckInError::NameInvalid));
    }

    #[test]
    fn should_reject_long_name() {
        let result = CheckIn::new(props(&"x".repeat(51), "a@example.com", DietPreference::Veg));
        assert!(matches!(result.unwrap_err(), CheckInError::NameInvalid));
    }

    #[test]
    fn should_reject_invalid_email() {
        let result = CheckIn::new(props("Asha", "not-an-email", DietPreference::Veg));
        assert!(matches!(result.unwrap_err(), CheckInError::EmailInvalid));
    }

    #[test]
    fn should_update_only_provided_fields() {
        let mut check_in = check_in(DietPreference::NonVeg);

        check_in.update_today(None, Some(true));
        assert_eq!(check_in.todays_actual_diet, DietPreference::NonVeg);
        assert!(check_in.skip_meal_today);

        check_in.update_today(Some(DietPreference::Vegan), None);
        assert_eq!(check_in.todays_actual_diet, DietPreference::Vegan);
        assert_eq!(check_in.diet_preference, DietPreference::NonVeg);
    }

    #[test]
    fn should_move_todays_diet_with_new_default_when_eating() {
        let mut check_in = check_in(DietPreference::NonVeg);

        check_in.update_preferences(Some(DietPreference::Vegan), Some(LunchTiming::Noon));

        assert_eq!(check_in.diet_preference, DietPreference::Vegan);
        assert_eq!(check_in.todays_actual_diet, DietPreference::Vegan);
        assert_eq!(check_in.lunch_timing, LunchTiming::Noon);
    }

    #[test]
    fn should_keep_todays_diet_when_skipping() {
        let mut check_in = check_in(DietPreference::NonVeg);
        check_in.update_today(None, Some(true));

        check_in.update_preferences(Some(DietPreference::Veg), None);

        assert_eq!(check_in.diet_preference, DietPreference::Veg);
        assert_eq!(check_in.todays_actual_diet, DietPreference::NonVeg);
        assert_eq!(check_in.lunch_timing, LunchTiming::One);
    }

    #[test]
    fn should_count_by_todays_actual_diet() {
        let mut switched = check_in(DietPreference::NonVeg);
        switched.update_today(Some(DietPreference::Veg), None);
        let all = vec![
            check_in(DietPreference::Veg),
            switched,
            check_in(DietPreference::NonVeg),
            check_in(DietPreference::Vegan),
        ];

        let summary = CheckInSummary::from_check_ins(&all);

        assert_eq!(
            summary,
            CheckInSummary {
                total_check_ins: 4,
                veg_count: 2,
                non_veg_count: 1,
                vegan_count: 1,
            }
        );
    }

    #[test]
    fn should_exclude_skipped_meals_from_summary() {
        let mut skipping = check_in(DietPreference::Veg);
        skipping.update_today(None, Some(true));
        let all = vec![skipping, check_in(DietPreference::NonVeg)];

        let summary = CheckInSummary::from_check_ins(&all);

        assert_eq!(summary.total_check_ins, 1);
        assert_eq!(summary.veg_count, 0);
        assert_eq!(summary.non_veg_count, 1);
    }

    #[test]
    fn should_return_zero_summary_for_no_check_ins() {
        let none: Vec<CheckIn> = Vec::new();
        let summary = CheckInSummary::from_check_ins(&none);
        assert_eq!(summary, CheckInSummary::default());
    }
}
