use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::dish_waste::model::{DishWasteItem, DishWasteLog};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishWasteItemEntity {
    pub dish_id: String,
    pub dish_name: String,
    #[serde(default)]
    pub category: String,
    pub amount_wasted_kg: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishWasteLogEntity {
    pub id: Uuid,
    pub date: NaiveDate,
    pub items: Vec<DishWasteItemEntity>,
}

impl DishWasteLogEntity {
    pub fn from_domain(log: &DishWasteLog) -> Self {
        Self {
            id: log.id,
            date: log.date,
            items: log
                .items
                .iter()
                .map(|item| DishWasteItemEntity {
                    dish_id: item.dish_id.clone(),
                    dish_name: item.dish_name.clone(),
                    category: item.category.clone(),
                    amount_wasted_kg: item.amount_wasted_kg,
                })
                .collect(),
        }
    }

    pub fn into_domain(self) -> DishWasteLog {
        DishWasteLog::from_repository(
            self.id,
            self.date,
            self.items
                .into_iter()
                .map(|item| DishWasteItem {
                    dish_id: item.dish_id,
                    dish_name: item.dish_name,
                    category: item.category,
                    amount_wasted_kg: item.amount_wasted_kg,
                })
                .collect(),
        )
    }
}
