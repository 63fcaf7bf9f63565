use async_trait::async_trait;

use crate::domain::dish_waste::errors::DishWasteError;
use crate::domain::dish_waste::model::{DishWasteAmount, DishWasteLog};

pub struct CreateDishWasteLogParams {
    pub amounts: Vec<DishWasteAmount>,
}

#[async_trait]
pub trait CreateDishWasteLogUseCase: Send + Sync {
    async fn execute(
        &self,
        params: CreateDishWasteLogParams,
    ) -> Result<DishWasteLog, DishWasteError>;
}
