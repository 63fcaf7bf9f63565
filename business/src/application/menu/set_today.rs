use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::model::DishCatalog;
use crate::domain::logger::Logger;
use crate::domain::menu::errors::MenuError;
use crate::domain::menu::model::MenuItem;
use crate::domain::menu::repository::MenuRepository;
use crate::domain::menu::use_cases::set_today::{SetTodaysMenuParams, SetTodaysMenuUseCase};

pub struct SetTodaysMenuUseCaseImpl {
    pub repository: Arc<dyn MenuRepository>,
    pub catalog: &'static DishCatalog,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SetTodaysMenuUseCase for SetTodaysMenuUseCaseImpl {
    async fn execute(&self, params: SetTodaysMenuParams) -> Result<Vec<MenuItem>, MenuError> {
        if params.dish_ids.is_empty() {
            return Err(MenuError::EmptySelection);
        }

        // A dish appears once, at its first position in the selection
        let mut seen = HashSet::new();
        let items = params
            .dish_ids
            .iter()
            .filter(|id| seen.insert(id.as_str()))
            .map(|id| {
                self.catalog
                    .find_by_id(id)
                    .map(MenuItem::from)
                    .ok_or_else(|| MenuError::UnknownDish(id.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.repository.replace_today(&items).await?;
        self.logger
            .info(&format!("Today's menu set with {} dishes", items.len()));

        Ok(items)
    }
}
