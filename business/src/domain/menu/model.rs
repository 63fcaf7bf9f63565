use crate::domain::catalog::model::DishOption;

/// A dish the kitchen is serving today, denormalized from the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub dish_id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub image: String,
}

impl From<&DishOption> for MenuItem {
    fn from(dish: &DishOption) -> Self {
        Self {
            dish_id: dish.id.clone(),
            name: dish.name.clone(),
            category: dish.category.clone(),
            description: dish.description.clone(),
            image: dish.image.clone(),
        }
    }
}
