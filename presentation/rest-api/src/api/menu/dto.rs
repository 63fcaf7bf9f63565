use poem_openapi::Object;

use business::domain::menu::model::MenuItem;

#[derive(Debug, Clone, Object)]
pub struct SetTodaysMenuRequest {
    /// Catalog dish ids, in the order they should be shown
    pub dish_ids: Vec<String>,
}

#[derive(Debug, Clone, Object)]
pub struct MenuItemResponse {
    pub dish_id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub image: String,
}

impl From<MenuItem> for MenuItemResponse {
    fn from(item: MenuItem) -> Self {
        Self {
            dish_id: item.dish_id,
            name: item.name,
            category: item.category,
            description: item.description,
            image: item.image,
        }
    }
}
