use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::menu::errors::MenuError;
use crate::domain::menu::model::MenuItem;
use crate::domain::menu::repository::MenuRepository;
use crate::domain::menu::use_cases::get_today::GetTodaysMenuUseCase;

pub struct GetTodaysMenuUseCaseImpl {
    pub repository: Arc<dyn MenuRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetTodaysMenuUseCase for GetTodaysMenuUseCaseImpl {
    async fn execute(&self) -> Result<Vec<MenuItem>, MenuError> {
        self.logger.info("Getting today's menu");
        Ok(self.repository.get_today().await?)
    }
}
