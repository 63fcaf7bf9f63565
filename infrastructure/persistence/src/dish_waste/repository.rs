use std::sync::Arc;

use async_trait::async_trait;

use business::domain::dish_waste::model::DishWasteLog;
use business::domain::dish_waste::repository::DishWasteLogRepository;
use business::domain::errors::RepositoryError;
use business::domain::storage::{KeyValueStore, keys};

use super::entity::DishWasteLogEntity;
use crate::json_list;

pub struct DishWasteLogRepositoryKv {
    store: Arc<dyn KeyValueStore>,
}

impl DishWasteLogRepositoryKv {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl DishWasteLogRepository for DishWasteLogRepositoryKv {
    async fn get_all(&self) -> Result<Vec<DishWasteLog>, RepositoryError> {
        let entities: Vec<DishWasteLogEntity> =
            json_list::load(self.store.as_ref(), keys::DISH_WASTE_LOGS).await?;
        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn save(&self, log: &DishWasteLog) -> Result<(), RepositoryError> {
        let entity = DishWasteLogEntity::from_domain(log);
        json_list::update(
            self.store.as_ref(),
            keys::DISH_WASTE_LOGS,
            |entities: &mut Vec<DishWasteLogEntity>| {
                json_list::upsert_front(entities, entity.clone(), |e| e.id == entity.id)
            },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json_list::MAX_LOG_ENTRIES;
    use crate::key_value::memory::InMemoryKeyValueStore;
    use business::domain::dish_waste::model::DishWasteItem;
    use chrono::Utc;
    use uuid::Uuid;

    fn log(kg: f64) -> DishWasteLog {
        DishWasteLog::from_repository(
            Uuid::new_v4(),
            Utc::now().date_naive(),
            vec![DishWasteItem {
                dish_id: "m_1".to_string(),
                dish_name: "Dal Makhani".to_string(),
                category: "Main Course".to_string(),
                amount_wasted_kg: kg,
            }],
        )
    }

    #[tokio::test]
    async fn should_keep_latest_logs_newest_first() {
        let repo = DishWasteLogRepositoryKv::new(Arc::new(InMemoryKeyValueStore::new()));

        for i in 0..(MAX_LOG_ENTRIES + 3) {
            repo.save(&log(1.0 + i as f64)).await.unwrap();
        }

        let logs = repo.get_all().await.unwrap();
        assert_eq!(logs.len(), MAX_LOG_ENTRIES);
        assert_eq!(logs[0].items[0].amount_wasted_kg, 1.0 + (MAX_LOG_ENTRIES + 2) as f64);
    }

    #[tokio::test]
    async fn should_store_items_in_camel_case() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let repo = DishWasteLogRepositoryKv::new(store.clone());
        let saved = log(0.75);

        repo.save(&saved).await.unwrap();

        let raw = store.get(keys::DISH_WASTE_LOGS).await.unwrap().unwrap();
        assert!(raw.contains(r#""amountWastedKg":0.75"#));
        assert!(raw.contains(r#""dishName":"Dal Makhani""#));
        assert_eq!(repo.get_all().await.unwrap(), vec![saved]);
    }
}
