use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::waste::model::WasteLog;
use business::domain::waste::value_objects::WasteCategory;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WasteLogEntity {
    pub id: Uuid,
    pub date: NaiveDate,
    pub category: WasteCategory,
    pub amount: f64,
    pub unit: String,
    pub logged_by: String,
    #[serde(default)]
    pub notes: String,
}

impl WasteLogEntity {
    pub fn from_domain(log: &WasteLog) -> Self {
        Self {
            id: log.id,
            date: log.date,
            category: log.category,
            amount: log.amount,
            unit: log.unit.clone(),
            logged_by: log.logged_by.clone(),
            notes: log.notes.clone(),
        }
    }

    pub fn into_domain(self) -> WasteLog {
        WasteLog::from_repository(
            self.id,
            self.date,
            self.category,
            self.amount,
            self.unit,
            self.logged_by,
            self.notes,
        )
    }
}
