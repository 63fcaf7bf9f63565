use std::sync::Arc;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::menu::model::MenuItem;
use business::domain::menu::repository::MenuRepository;
use business::domain::storage::{KeyValueStore, keys};

use super::entity::MenuItemEntity;
use crate::json_list;

pub struct MenuRepositoryKv {
    store: Arc<dyn KeyValueStore>,
}

impl MenuRepositoryKv {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl MenuRepository for MenuRepositoryKv {
    async fn get_today(&self) -> Result<Vec<MenuItem>, RepositoryError> {
        let entities: Vec<MenuItemEntity> =
            json_list::load(self.store.as_ref(), keys::TODAYS_MENU).await?;
        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn replace_today(&self, items: &[MenuItem]) -> Result<(), RepositoryError> {
        let entities: Vec<MenuItemEntity> = items.iter().map(MenuItemEntity::from_domain).collect();
        json_list::store(self.store.as_ref(), keys::TODAYS_MENU, &entities).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key_value::memory::InMemoryKeyValueStore;

    fn item(id: &str, name: &str) -> MenuItem {
        MenuItem {
            dish_id: id.to_string(),
            name: name.to_string(),
            category: "Breads".to_string(),
            description: String::new(),
            image: format!("/images/menu/{id}.png"),
        }
    }

    #[tokio::test]
    async fn should_replace_whole_menu() {
        let repo = MenuRepositoryKv::new(Arc::new(InMemoryKeyValueStore::new()));

        repo.replace_today(&[item("b_1", "Tandoori Roti"), item("b_3", "Naan")])
            .await
            .unwrap();
        repo.replace_today(&[item("b_2", "Missi Roti")]).await.unwrap();

        let menu = repo.get_today().await.unwrap();
        assert_eq!(menu.len(), 1);
        assert_eq!(menu[0].name, "Missi Roti");
    }

    #[tokio::test]
    async fn should_read_menu_saved_with_dish_fields() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        store
            .set(
                keys::TODAYS_MENU,
                r#"[{"id": "r_3", "name": "Chicken Biryani", "category": "Rice", "aiHint": "biryani"}, {"name": "no id"}]"#,
            )
            .await
            .unwrap();
        let repo = MenuRepositoryKv::new(store);

        let menu = repo.get_today().await.unwrap();

        assert_eq!(menu.len(), 1);
        assert_eq!(menu[0].dish_id, "r_3");
        assert_eq!(menu[0].description, "");
    }
}
