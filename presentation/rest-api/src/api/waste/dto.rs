use chrono::NaiveDate;
use poem_openapi::{Enum, Object};

use business::domain::waste::model::{WasteLog, WasteSummary};
use business::domain::waste::value_objects::WasteCategory;

#[derive(Debug, Clone, Copy, PartialEq, Enum)]
pub enum WasteCategoryDto {
    #[oai(rename = "food")]
    Food,
    #[oai(rename = "water")]
    Water,
}

impl From<WasteCategoryDto> for WasteCategory {
    fn from(c: WasteCategoryDto) -> Self {
        match c {
            WasteCategoryDto::Food => WasteCategory::Food,
            WasteCategoryDto::Water => WasteCategory::Water,
        }
    }
}

impl From<WasteCategory> for WasteCategoryDto {
    fn from(c: WasteCategory) -> Self {
        match c {
            WasteCategory::Food => WasteCategoryDto::Food,
            WasteCategory::Water => WasteCategoryDto::Water,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreateWasteLogRequest {
    pub category: WasteCategoryDto,
    /// Kilograms for food, liters for water; at least 0.1
    pub amount: f64,
}

#[derive(Debug, Clone, Object)]
pub struct WasteLogResponse {
    pub id: String,
    pub date: NaiveDate,
    pub category: WasteCategoryDto,
    pub amount: f64,
    /// "kg" or "L"
    pub unit: String,
    pub logged_by: String,
    pub notes: String,
}

impl From<WasteLog> for WasteLogResponse {
    fn from(log: WasteLog) -> Self {
        Self {
            id: log.id.to_string(),
            date: log.date,
            category: log.category.into(),
            amount: log.amount,
            unit: log.unit,
            logged_by: log.logged_by,
            notes: log.notes,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct WasteSummaryResponse {
    pub food_kg: f64,
    pub water_liters: f64,
    /// Number of logs the totals were computed from
    pub entries: u32,
}

impl From<WasteSummary> for WasteSummaryResponse {
    fn from(s: WasteSummary) -> Self {
        Self {
            food_kg: s.food_kg,
            water_liters: s.water_liters,
            entries: s.entries,
        }
    }
}
