use std::collections::HashSet;

use serde::Serialize;

use super::errors::CatalogError;

/// A dish as declared in a catalog group, before it is bound to its category.
#[derive(Debug, Clone)]
pub struct DishEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub ai_hint: String,
}

impl DishEntry {
    /// Declares a dish whose image lives at the conventional `/images/menu/<id>.png` path.
    pub fn new(id: &str, name: &str, description: &str, ai_hint: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            image: format!("/images/menu/{}.png", id),
            ai_hint: ai_hint.to_string(),
        }
    }
}

/// A preparable dish. Immutable once its catalog is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DishOption {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub image: String,
    pub ai_hint: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DishCategory {
    pub name: String,
    pub dishes: Vec<DishOption>,
}

/// Ordered registry of dishes grouped by category.
///
/// Dish names are unique across the whole catalog: they are the closed
/// vocabulary AI suggestions are validated against.
#[derive(Debug, Clone, PartialEq)]
pub struct DishCatalog {
    categories: Vec<DishCategory>,
}

impl DishCatalog {
    pub fn new(groups: Vec<(String, Vec<DishEntry>)>) -> Result<Self, CatalogError> {
        let mut seen_names = HashSet::new();
        let mut seen_ids = HashSet::new();
        let mut categories = Vec::with_capacity(groups.len());

        for (category, entries) in groups {
            if category.trim().is_empty() {
                return Err(CatalogError::EmptyField);
            }
            if entries.is_empty() {
                return Err(CatalogError::EmptyCategory(category));
            }

            let mut dishes = Vec::with_capacity(entries.len());
            for entry in entries {
                if entry.id.trim().is_empty() || entry.name.trim().is_empty() {
                    return Err(CatalogError::EmptyField);
                }
                if !seen_ids.insert(entry.id.clone()) {
                    return Err(CatalogError::DuplicateId(entry.id));
                }
                if !seen_names.insert(entry.name.clone()) {
                    return Err(CatalogError::DuplicateName(entry.name));
                }
                dishes.push(DishOption {
                    id: entry.id,
                    name: entry.name,
                    description: entry.description,
                    category: category.clone(),
                    image: entry.image,
                    ai_hint: entry.ai_hint,
                });
            }

            categories.push(DishCategory {
                name: category,
                dishes,
            });
        }

        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[DishCategory] {
        &self.categories
    }

    pub fn all_dishes(&self) -> impl Iterator<Item = &DishOption> {
        self.categories.iter().flat_map(|c| c.dishes.iter())
    }

    /// Flattened dish names in catalog order.
    pub fn all_names(&self) -> Vec<String> {
        self.all_dishes().map(|d| d.name.clone()).collect()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&DishOption> {
        self.all_dishes().find(|d| d.id == id)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.all_dishes().any(|d| d.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, name: &str) -> DishEntry {
        DishEntry::new(id, name, "desc", "hint")
    }

    #[test]
    fn should_assign_category_from_group() {
        let catalog = DishCatalog::new(vec![
            ("Breads".to_string(), vec![entry("b_1", "Naan")]),
            ("Rice".to_string(), vec![entry("r_1", "Jeera Rice")]),
        ])
        .unwrap();

        assert_eq!(catalog.find_by_id("b_1").unwrap().category, "Breads");
        assert_eq!(catalog.find_by_id("r_1").unwrap().category, "Rice");
    }

    #[test]
    fn should_reject_duplicate_name_across_categories() {
        let result = DishCatalog::new(vec![
            ("Rice".to_string(), vec![entry("r_1", "Veg Biryani")]),
            ("Specials".to_string(), vec![entry("sp_1", "Veg Biryani")]),
        ]);

        assert_eq!(
            result.unwrap_err(),
            CatalogError::DuplicateName("Veg Biryani".to_string())
        );
    }

    #[test]
    fn should_reject_duplicate_id() {
        let result = DishCatalog::new(vec![(
            "Breads".to_string(),
            vec![entry("b_1", "Naan"), entry("b_1", "Missi Roti")],
        )]);

        assert_eq!(result.unwrap_err(), CatalogError::DuplicateId("b_1".to_string()));
    }

    #[test]
    fn should_reject_empty_category() {
        let result = DishCatalog::new(vec![("Breads".to_string(), vec![])]);

        assert!(matches!(result.unwrap_err(), CatalogError::EmptyCategory(_)));
    }

    #[test]
    fn should_reject_blank_dish_name() {
        let result = DishCatalog::new(vec![("Breads".to_string(), vec![entry("b_1", "  ")])]);

        assert_eq!(result.unwrap_err(), CatalogError::EmptyField);
    }

    #[test]
    fn should_flatten_names_in_catalog_order() {
        let catalog = DishCatalog::new(vec![
            ("Breads".to_string(), vec![entry("b_1", "Naan"), entry("b_2", "Kulcha")]),
            ("Rice".to_string(), vec![entry("r_1", "Jeera Rice")]),
        ])
        .unwrap();

        assert_eq!(catalog.all_names(), vec!["Naan", "Kulcha", "Jeera Rice"]);
        assert!(catalog.contains_name("Kulcha"));
        assert!(!catalog.contains_name("kulcha"));
    }

    #[test]
    fn should_default_image_path_from_id() {
        let dish = entry("s_1", "Kheer");
        assert_eq!(dish.image, "/images/menu/s_1.png");
    }
}
