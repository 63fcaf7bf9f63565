use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use super::errors::WasteError;
use super::value_objects::WasteCategory;

pub const MIN_WASTE_AMOUNT: f64 = 0.1;
pub const DEFAULT_LOGGED_BY: &str = "Kitchen Staff";

#[derive(Debug, Clone, PartialEq)]
pub struct WasteLog {
    pub id: Uuid,
    pub date: NaiveDate,
    pub category: WasteCategory,
    pub amount: f64,
    pub unit: String,
    pub logged_by: String,
    pub notes: String,
}

impl WasteLog {
    pub fn new(category: WasteCategory, amount: f64) -> Result<Self, WasteError> {
        if !amount.is_finite() || amount < MIN_WASTE_AMOUNT {
            return Err(WasteError::AmountTooSmall);
        }

        let notes = match category {
            WasteCategory::Food => format!("Excess {amount}kg"),
            WasteCategory::Water => format!("Wasted {amount}L"),
        };

        Ok(Self {
            id: Uuid::new_v4(),
            date: Utc::now().date_naive(),
            category,
            amount,
            unit: category.unit().to_string(),
            logged_by: DEFAULT_LOGGED_BY.to_string(),
            notes,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        date: NaiveDate,
        category: WasteCategory,
        amount: f64,
        unit: String,
        logged_by: String,
        notes: String,
    ) -> Self {
        Self {
            id,
            date,
            category,
            amount,
            unit,
            logged_by,
            notes,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WasteSummary {
    pub food_kg: f64,
    pub water_liters: f64,
    pub entries: u32,
}

impl WasteSummary {
    pub fn from_logs<'a>(logs: impl IntoIterator<Item = &'a WasteLog>) -> Self {
        logs.into_iter().fold(Self::default(), |mut summary, log| {
            summary.entries += 1;
            match log.category {
                WasteCategory::Food => summary.food_kg += log.amount,
                WasteCategory::Water => summary.water_liters += log.amount,
            }
            summary
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_describe_food_waste_in_kilograms() {
        let log = WasteLog::new(WasteCategory::Food, 2.5).unwrap();

        assert_eq!(log.unit, "kg");
        assert_eq!(log.notes, "Excess 2.5kg");
        assert_eq!(log.logged_by, DEFAULT_LOGGED_BY);
    }

    #[test]
    fn should_describe_water_waste_in_liters() {
        let log = WasteLog::new(WasteCategory::Water, 12.0).unwrap();

        assert_eq!(log.unit, "L");
        assert_eq!(log.notes, "Wasted 12L");
    }

    #[test]
    fn should_reject_amount_below_minimum() {
        assert!(matches!(
            WasteLog::new(WasteCategory::Food, 0.05).unwrap_err(),
            WasteError::AmountTooSmall
        ));
        assert!(WasteLog::new(WasteCategory::Food, f64::NAN).is_err());
        assert!(WasteLog::new(WasteCategory::Water, MIN_WASTE_AMOUNT).is_ok());
    }

    #[test]
    fn should_total_amounts_per_category() {
        let logs = vec![
            WasteLog::new(WasteCategory::Food, 2.0).unwrap(),
            WasteLog::new(WasteCategory::Food, 1.5).unwrap(),
            WasteLog::new(WasteCategory::Water, 10.0).unwrap(),
        ];

        let summary = WasteSummary::from_logs(&logs);

        assert_eq!(summary.entries, 3);
        assert!((summary.food_kg - 3.5).abs() < f64::EPSILON);
        assert!((summary.water_liters - 10.0).abs() < f64::EPSILON);
    }
}
