use serde::{Deserialize, Serialize};

use business::domain::menu::model::MenuItem;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemEntity {
    #[serde(rename = "id")]
    pub dish_id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
}

impl MenuItemEntity {
    pub fn from_domain(item: &MenuItem) -> Self {
        Self {
            dish_id: item.dish_id.clone(),
            name: item.name.clone(),
            category: item.category.clone(),
            description: item.description.clone(),
            image: item.image.clone(),
        }
    }

    pub fn into_domain(self) -> MenuItem {
        MenuItem {
            dish_id: self.dish_id,
            name: self.name,
            category: self.category,
            description: self.description,
            image: self.image,
        }
    }
}
