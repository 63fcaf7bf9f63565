use std::sync::Arc;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::storage::{KeyValueStore, keys};
use business::domain::waste::model::WasteLog;
use business::domain::waste::repository::WasteLogRepository;

use super::entity::WasteLogEntity;
use crate::json_list;

pub struct WasteLogRepositoryKv {
    store: Arc<dyn KeyValueStore>,
}

impl WasteLogRepositoryKv {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl WasteLogRepository for WasteLogRepositoryKv {
    async fn get_all(&self) -> Result<Vec<WasteLog>, RepositoryError> {
        let entities: Vec<WasteLogEntity> =
            json_list::load(self.store.as_ref(), keys::WASTE_LOGS).await?;
        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn save(&self, log: &WasteLog) -> Result<(), RepositoryError> {
        let entity = WasteLogEntity::from_domain(log);
        json_list::update(
            self.store.as_ref(),
            keys::WASTE_LOGS,
            |entities: &mut Vec<WasteLogEntity>| {
                json_list::upsert_front(entities, entity.clone(), |e| e.id == entity.id)
            },
        )
        .await
    }
}
