use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use business::domain::check_in::model::CheckIn;
use business::domain::check_in::repository::CheckInRepository;
use business::domain::errors::RepositoryError;
use business::domain::storage::{KeyValueStore, keys};

use super::entity::CheckInEntity;
use crate::json_list;

pub struct CheckInRepositoryKv {
    store: Arc<dyn KeyValueStore>,
}

impl CheckInRepositoryKv {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    async fn load(&self) -> Result<Vec<CheckInEntity>, RepositoryError> {
        json_list::load(self.store.as_ref(), keys::CHECK_INS).await
    }
}

#[async_trait]
impl CheckInRepository for CheckInRepositoryKv {
    async fn get_all(&self) -> Result<Vec<CheckIn>, RepositoryError> {
        Ok(self
            .load()
            .await?
            .into_iter()
            .map(|e| e.into_domain())
            .collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<CheckIn, RepositoryError> {
        self.load()
            .await?
            .into_iter()
            .find(|e| e.id == id)
            .map(|e| e.into_domain())
            .ok_or(RepositoryError::NotFound)
    }

    async fn save(&self, check_in: &CheckIn) -> Result<(), RepositoryError> {
        let entity = CheckInEntity::from_domain(check_in);
        json_list::update(
            self.store.as_ref(),
            keys::CHECK_INS,
            |entities: &mut Vec<CheckInEntity>| {
                json_list::upsert_front(entities, entity.clone(), |e| e.id == entity.id)
            },
        )
        .await
    }
}
