use once_cell::sync::Lazy;

use super::model::{DishCatalog, DishEntry};

static STANDARD_CATALOG: Lazy<DishCatalog> = Lazy::new(|| {
    DishCatalog::new(standard_groups()).expect("standard dish catalog must have unique ids and names")
});

impl DishCatalog {
    /// The compiled-in catalog of everything the kitchen can prepare.
    pub fn standard() -> &'static DishCatalog {
        &STANDARD_CATALOG
    }
}

fn standard_groups() -> Vec<(String, Vec<DishEntry>)> {
    vec![
        (
            "Main Course - Vegetarian".to_string(),
            vec![
                DishEntry::new(
                    "mc_veg_1",
                    "Dal Makhani",
                    "Rich and creamy black lentils and kidney beans.",
                    "lentil curry",
                ),
                DishEntry::new(
                    "mc_veg_2",
                    "Shahi Paneer",
                    "Creamy cottage cheese curry with a rich Mughlai gravy.",
                    "paneer curry",
                ),
                DishEntry::new(
                    "mc_veg_3",
                    "Paneer Butter Masala",
                    "Creamy tomato-based curry with soft paneer cubes.",
                    "paneer masala",
                ),
                DishEntry::new(
                    "mc_veg_4",
                    "Palak Paneer",
                    "Cottage cheese in a smooth spinach gravy.",
                    "spinach paneer",
                ),
            ],
        ),
        (
            "Main Course - Non-Vegetarian".to_string(),
            vec![
                DishEntry::new(
                    "mc_nonveg_1",
                    "Chicken Tikka Masala",
                    "Grilled chicken chunks in a spiced curry sauce.",
                    "chicken curry",
                ),
                DishEntry::new(
                    "mc_nonveg_2",
                    "Butter Chicken",
                    "Mildly spiced chicken curry in a buttery tomato sauce.",
                    "butter chicken",
                ),
            ],
        ),
        (
            "Breads".to_string(),
            vec![
                DishEntry::new(
                    "b_1",
                    "Tandoori Roti",
                    "Whole wheat bread baked in a tandoor.",
                    "roti bread",
                ),
                DishEntry::new(
                    "b_2",
                    "Missi Roti",
                    "Savory flatbread made with gram flour and spices.",
                    "missi roti",
                ),
                DishEntry::new("b_3", "Naan", "Leavened, oven-baked flatbread.", "naan bread"),
            ],
        ),
        (
            "Rice".to_string(),
            vec![
                DishEntry::new(
                    "r_1",
                    "Vegetable Pulao",
                    "Aromatic rice cooked with mixed vegetables and spices.",
                    "pulao rice",
                ),
                DishEntry::new(
                    "r_2",
                    "Veg Biryani",
                    "Flavorful rice dish with mixed vegetables and aromatic spices.",
                    "veg biryani",
                ),
                DishEntry::new(
                    "r_3",
                    "Chicken Biryani",
                    "Aromatic basmati rice cooked with chicken and spices.",
                    "chicken biryani",
                ),
            ],
        ),
        (
            "Sweet Dish".to_string(),
            vec![
                DishEntry::new(
                    "s_1",
                    "Gulab Jamun",
                    "Soft, melt-in-your-mouth milk-solid balls in sugar syrup.",
                    "indian dessert",
                ),
                DishEntry::new(
                    "s_2",
                    "Shahi Tukda",
                    "Rich bread pudding with nuts and saffron.",
                    "bread pudding",
                ),
                DishEntry::new("s_3", "Kheer", "Traditional Indian rice pudding.", "rice pudding"),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn should_build_standard_catalog() {
        let catalog = DishCatalog::standard();

        assert_eq!(catalog.categories().len(), 5);
        assert_eq!(catalog.all_dishes().count(), 15);
        assert_eq!(catalog.categories()[0].name, "Main Course - Vegetarian");
    }

    #[test]
    fn should_return_same_names_on_repeated_flattening() {
        let catalog = DishCatalog::standard();

        let first = catalog.all_names();
        let second = catalog.all_names();

        assert_eq!(first, second);
    }

    #[test]
    fn should_have_no_duplicate_names_in_standard_catalog() {
        let names = DishCatalog::standard().all_names();
        let unique: HashSet<_> = names.iter().collect();

        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn should_include_at_least_one_staple_category() {
        let catalog = DishCatalog::standard();

        assert!(catalog.categories().iter().any(|c| c.name == "Rice"));
        assert!(catalog.categories().iter().any(|c| c.name == "Breads"));
    }

    #[test]
    fn should_find_dish_by_id() {
        let dish = DishCatalog::standard().find_by_id("r_3").unwrap();

        assert_eq!(dish.name, "Chicken Biryani");
        assert_eq!(dish.category, "Rice");
        assert_eq!(dish.image, "/images/menu/r_3.png");
    }
}
