use chrono::NaiveDate;
use poem_openapi::Object;

use business::domain::dish_waste::model::{DishWasteAmount, DishWasteItem, DishWasteLog};

#[derive(Debug, Clone, Object)]
pub struct DishWasteAmountRequest {
    /// Id of a dish on today's menu
    pub dish_id: String,
    /// Kilograms wasted; zero or less is ignored
    pub amount_kg: f64,
}

#[derive(Debug, Clone, Object)]
pub struct CreateDishWasteLogRequest {
    pub items: Vec<DishWasteAmountRequest>,
}

impl From<CreateDishWasteLogRequest> for Vec<DishWasteAmount> {
    fn from(request: CreateDishWasteLogRequest) -> Self {
        request
            .items
            .into_iter()
            .map(|item| DishWasteAmount {
                dish_id: item.dish_id,
                amount_kg: item.amount_kg,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Object)]
pub struct DishWasteItemResponse {
    pub dish_id: String,
    pub dish_name: String,
    pub category: String,
    pub amount_wasted_kg: f64,
}

impl From<DishWasteItem> for DishWasteItemResponse {
    fn from(item: DishWasteItem) -> Self {
        Self {
            dish_id: item.dish_id,
            dish_name: item.dish_name,
            category: item.category,
            amount_wasted_kg: item.amount_wasted_kg,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct DishWasteLogResponse {
    pub id: String,
    pub date: NaiveDate,
    pub items: Vec<DishWasteItemResponse>,
    pub total_kg: f64,
}

impl From<DishWasteLog> for DishWasteLogResponse {
    fn from(log: DishWasteLog) -> Self {
        let total_kg = log.total_kg();
        Self {
            id: log.id.to_string(),
            date: log.date,
            items: log.items.into_iter().map(Into::into).collect(),
            total_kg,
        }
    }
}
