use poem_openapi::{OpenApi, payload::Json};

use business::domain::catalog::model::DishCatalog;

use crate::api::catalog::dto::DishCategoryResponse;
use crate::api::tags::ApiTags;

pub struct CatalogApi {
    catalog: &'static DishCatalog,
}

impl CatalogApi {
    pub fn new(catalog: &'static DishCatalog) -> Self {
        Self { catalog }
    }
}

/// Dish catalog API
#[OpenApi]
impl CatalogApi {
    /// List dishes by category
    ///
    /// Returns every dish the kitchen can prepare, grouped by category in
    /// catalog order.
    #[oai(path = "/dishes", method = "get", tag = "ApiTags::Dishes")]
    async fn get_dishes(&self) -> Json<Vec<DishCategoryResponse>> {
        Json(
            self.catalog
                .categories()
                .iter()
                .map(DishCategoryResponse::from)
                .collect(),
        )
    }
}
