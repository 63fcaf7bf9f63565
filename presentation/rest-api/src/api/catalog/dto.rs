use poem_openapi::Object;

use business::domain::catalog::model::{DishCategory, DishOption};

#[derive(Debug, Clone, Object)]
pub struct DishResponse {
    /// Stable dish identifier, e.g. "r_3"
    pub id: String,
    /// Display name, unique across the catalog
    pub name: String,
    pub description: String,
    /// Category the dish belongs to
    pub category: String,
    /// Image path relative to the web root
    pub image: String,
    /// Short hint used when generating dish imagery
    pub ai_hint: String,
}

impl From<&DishOption> for DishResponse {
    fn from(dish: &DishOption) -> Self {
        Self {
            id: dish.id.clone(),
            name: dish.name.clone(),
            description: dish.description.clone(),
            category: dish.category.clone(),
            image: dish.image.clone(),
            ai_hint: dish.ai_hint.clone(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct DishCategoryResponse {
    pub name: String,
    pub dishes: Vec<DishResponse>,
}

impl From<&DishCategory> for DishCategoryResponse {
    fn from(category: &DishCategory) -> Self {
        Self {
            name: category.name.clone(),
            dishes: category.dishes.iter().map(DishResponse::from).collect(),
        }
    }
}
