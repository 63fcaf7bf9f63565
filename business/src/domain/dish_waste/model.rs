use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use super::errors::DishWasteError;
use crate::domain::menu::model::MenuItem;

/// Kilograms of one menu dish thrown away.
#[derive(Debug, Clone, PartialEq)]
pub struct DishWasteItem {
    pub dish_id: String,
    pub dish_name: String,
    pub category: String,
    pub amount_wasted_kg: f64,
}

/// Amount entered by kitchen staff for a dish on today's menu.
#[derive(Debug, Clone, PartialEq)]
pub struct DishWasteAmount {
    pub dish_id: String,
    pub amount_kg: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DishWasteLog {
    pub id: Uuid,
    pub date: NaiveDate,
    pub items: Vec<DishWasteItem>,
}

impl DishWasteLog {
    /// Builds a log for today's menu, in menu order.
    ///
    /// Negative and non-finite amounts count as zero, dishes totalling zero are
    /// left out. At least one dish must remain.
    pub fn for_menu(
        menu: &[MenuItem],
        amounts: &[DishWasteAmount],
    ) -> Result<Self, DishWasteError> {
        if let Some(unknown) = amounts
            .iter()
            .find(|a| !menu.iter().any(|m| m.dish_id == a.dish_id))
        {
            return Err(DishWasteError::NotOnMenu(unknown.dish_id.clone()));
        }

        let items: Vec<DishWasteItem> = menu
            .iter()
            .filter_map(|dish| {
                let total: f64 = amounts
                    .iter()
                    .filter(|a| a.dish_id == dish.dish_id)
                    .map(|a| a.amount_kg)
                    .filter(|kg| kg.is_finite() && *kg > 0.0)
                    .sum();
                (total > 0.0).then(|| DishWasteItem {
                    dish_id: dish.dish_id.clone(),
                    dish_name: dish.name.clone(),
                    category: dish.category.clone(),
                    amount_wasted_kg: total,
                })
            })
            .collect();

        if items.is_empty() {
            return Err(DishWasteError::NothingToLog);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            date: Utc::now().date_naive(),
            items,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: Uuid, date: NaiveDate, items: Vec<DishWasteItem>) -> Self {
        Self { id, date, items }
    }

    pub fn total_kg(&self) -> f64 {
        self.items.iter().map(|i| i.amount_wasted_kg).sum()
    }
}
