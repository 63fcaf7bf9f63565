use async_trait::async_trait;

use crate::domain::suggestion::errors::SuggestionError;
use crate::domain::suggestion::model::{SuggestionOutcome, SuggestionRequest};

pub struct SuggestDishQuantitiesParams {
    pub request: SuggestionRequest,
    /// Closed vocabulary every suggested dish name must belong to.
    pub catalog_names: Vec<String>,
}

#[async_trait]
pub trait SuggestDishQuantitiesUseCase: Send + Sync {
    async fn execute(
        &self,
        params: SuggestDishQuantitiesParams,
    ) -> Result<SuggestionOutcome, SuggestionError>;
}
