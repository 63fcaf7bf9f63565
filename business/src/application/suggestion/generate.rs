use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::model::DishCatalog;
use crate::domain::check_in::model::CheckInSummary;
use crate::domain::check_in::repository::CheckInRepository;
use crate::domain::logger::Logger;
use crate::domain::suggestion::errors::SuggestionError;
use crate::domain::suggestion::model::{KitchenSuggestions, SuggestionRequest};
use crate::domain::suggestion::use_cases::generate::{
    GenerateKitchenSuggestionsParams, GenerateKitchenSuggestionsUseCase,
};
use crate::domain::suggestion::use_cases::suggest::{
    SuggestDishQuantitiesParams, SuggestDishQuantitiesUseCase,
};

pub struct GenerateKitchenSuggestionsUseCaseImpl {
    pub check_in_repository: Arc<dyn CheckInRepository>,
    pub engine: Arc<dyn SuggestDishQuantitiesUseCase>,
    pub catalog: &'static DishCatalog,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GenerateKitchenSuggestionsUseCase for GenerateKitchenSuggestionsUseCaseImpl {
    async fn execute(
        &self,
        params: GenerateKitchenSuggestionsParams,
    ) -> Result<KitchenSuggestions, SuggestionError> {
        self.logger
            .info(&format!("Generating kitchen suggestions for {}", params.date));

        let check_ins = self.check_in_repository.get_all().await?;
        let summary =
            CheckInSummary::from_check_ins(check_ins.iter().filter(|c| c.date == params.date));

        if summary.total_check_ins == 0 {
            self.logger
                .warn("No check-ins for the day, skipping suggestions");
            return Err(SuggestionError::NoCheckIns);
        }

        let outcome = self
            .engine
            .execute(SuggestDishQuantitiesParams {
                request: SuggestionRequest::from_summary(&summary, params.context),
                catalog_names: self.catalog.all_names(),
            })
            .await?;

        Ok(KitchenSuggestions { summary, outcome })
    }
}
