use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::suggestion::errors::SuggestionError;
use crate::domain::suggestion::model::{KitchenSuggestions, SuggestionContext};

pub struct GenerateKitchenSuggestionsParams {
    pub date: NaiveDate,
    pub context: SuggestionContext,
}

#[async_trait]
pub trait GenerateKitchenSuggestionsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GenerateKitchenSuggestionsParams,
    ) -> Result<KitchenSuggestions, SuggestionError>;
}
