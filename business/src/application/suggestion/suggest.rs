use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::suggestion::errors::SuggestionError;
use crate::domain::suggestion::model::{SuggestionOutcome, SuggestionsOutput};
use crate::domain::suggestion::prompt::{PromptExamples, build_prompt};
use crate::domain::suggestion::services::CompletionProvider;
use crate::domain::suggestion::use_cases::suggest::{
    SuggestDishQuantitiesParams, SuggestDishQuantitiesUseCase,
};

pub struct SuggestDishQuantitiesUseCaseImpl {
    pub provider: Arc<dyn CompletionProvider>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SuggestDishQuantitiesUseCase for SuggestDishQuantitiesUseCaseImpl {
    async fn execute(
        &self,
        params: SuggestDishQuantitiesParams,
    ) -> Result<SuggestionOutcome, SuggestionError> {
        let request = &params.request;
        self.logger.info(&format!(
            "Suggesting dish quantities for {} check-ins (veg={}, non_veg={}, vegan={})",
            request.total_check_ins, request.veg_count, request.non_veg_count, request.vegan_count
        ));

        let examples = PromptExamples::for_request(request);
        let prompt = build_prompt(request, &params.catalog_names, &examples);
        self.logger
            .debug(&format!("Suggestion prompt is {} chars", prompt.len()));

        let value = self
            .provider
            .complete(&prompt, &SuggestionsOutput::json_schema())
            .await
            .map_err(|e| {
                self.logger
                    .error(&format!("Completion provider failed: {}", e));
                SuggestionError::ProviderFailed(e)
            })?;

        let Some(value) = value else {
            self.logger
                .warn("Completion provider returned no structured output");
            return Ok(SuggestionOutcome::Empty);
        };

        let output: SuggestionsOutput = serde_json::from_value(value).map_err(|e| {
            self.logger
                .error(&format!("Structured output does not match schema: {}", e));
            SuggestionError::InvalidOutput
        })?;

        let outcome = SuggestionOutcome::from_provider(output.suggestions, &params.catalog_names);
        match &outcome {
            SuggestionOutcome::Suggested(suggestions) => self
                .logger
                .info(&format!("Generated {} dish suggestions", suggestions.len())),
            SuggestionOutcome::Empty => self.logger.warn("Completion provider suggested no dishes"),
            SuggestionOutcome::AdherenceViolation { rejected } => self.logger.warn(&format!(
                "Discarding suggestions, dishes outside the catalog: {}",
                rejected.join(", ")
            )),
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::suggestion::errors::CompletionError;
    use crate::domain::suggestion::model::{
        ADHERENCE_ERROR_NAME, DishSuggestion, SUGGESTION_ERROR_NAME, SuggestionRequest,
    };
    use mockall::mock;
    use serde_json::{Value, json};

    mock! {
        pub Provider {}

        #[async_trait]
        impl CompletionProvider for Provider {
            async fn complete(
                &self,
                prompt: &str,
                output_schema: &Value,
            ) -> Result<Option<Value>, CompletionError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn catalog() -> Vec<String> {
        ["Dal Makhani", "Butter Chicken", "Vegetable Pulao", "Naan"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn request() -> SuggestionRequest {
        SuggestionRequest {
            total_check_ins: 100,
            veg_count: 40,
            non_veg_count: 50,
            vegan_count: 10,
            ..Default::default()
        }
    }

    fn item(name: &str, quantity: &str) -> Value {
        json!({"dishName": name, "quantity": quantity, "note": "based on check-ins"})
    }

    fn params() -> SuggestDishQuantitiesParams {
        SuggestDishQuantitiesParams {
            request: request(),
            catalog_names: catalog(),
        }
    }

    fn use_case(provider: MockProvider) -> SuggestDishQuantitiesUseCaseImpl {
        SuggestDishQuantitiesUseCaseImpl {
            provider: Arc::new(provider),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_return_catalog_suggestions_unchanged_and_in_order() {
        let mut provider = MockProvider::new();
        provider
            .expect_complete()
            .withf(|prompt, schema| {
                prompt.contains("- Butter Chicken") && schema["required"] == json!(["suggestions"])
            })
            .times(1)
            .returning(|_, _| {
                Ok(Some(json!({
                    "suggestions": [
                        item("Dal Makhani", "Approx. 44 portions"),
                        item("Butter Chicken", "Approx. 55 portions"),
                        item("Vegetable Pulao", "Approx. 80 portions"),
                        item("Naan", "Approx. 80 portions"),
                    ]
                })))
            });

        let outcome = use_case(provider).execute(params()).await.unwrap();

        let SuggestionOutcome::Suggested(suggestions) = outcome else {
            panic!("expected suggestions, got {outcome:?}");
        };
        let names: Vec<&str> = suggestions.iter().map(|s| s.dish_name.as_str()).collect();
        assert_eq!(names, vec!["Dal Makhani", "Butter Chicken", "Vegetable Pulao", "Naan"]);
        assert_eq!(
            suggestions[1],
            DishSuggestion {
                dish_name: "Butter Chicken".to_string(),
                quantity: "Approx. 55 portions".to_string(),
                note: "based on check-ins".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn should_discard_batch_when_any_dish_is_outside_catalog() {
        let mut provider = MockProvider::new();
        provider.expect_complete().returning(|_, _| {
            Ok(Some(json!({
                "suggestions": [
                    item("Dal Makhani", "Approx. 44 portions"),
                    item("Chicken Pizza", "Approx. 55 portions"),
                ]
            })))
        });

        let outcome = use_case(provider).execute(params()).await.unwrap();

        assert_eq!(
            outcome,
            SuggestionOutcome::AdherenceViolation {
                rejected: vec!["Chicken Pizza".to_string()]
            }
        );
        let rendered = outcome.into_suggestions();
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].dish_name, ADHERENCE_ERROR_NAME);
    }

    #[tokio::test]
    async fn should_report_empty_when_provider_suggests_nothing() {
        let mut provider = MockProvider::new();
        provider
            .expect_complete()
            .returning(|_, _| Ok(Some(json!({"suggestions": []}))));

        let outcome = use_case(provider).execute(params()).await.unwrap();

        assert_eq!(outcome, SuggestionOutcome::Empty);
        assert_eq!(outcome.into_suggestions()[0].dish_name, SUGGESTION_ERROR_NAME);
    }

    #[tokio::test]
    async fn should_report_empty_when_provider_has_no_output() {
        let mut provider = MockProvider::new();
        provider.expect_complete().returning(|_, _| Ok(None));

        let outcome = use_case(provider).execute(params()).await.unwrap();

        assert_eq!(outcome, SuggestionOutcome::Empty);
    }

    #[tokio::test]
    async fn should_propagate_provider_failure_as_error() {
        let mut provider = MockProvider::new();
        provider
            .expect_complete()
            .returning(|_, _| Err(CompletionError::Rejected { status: 503 }));

        let result = use_case(provider).execute(params()).await;

        assert!(matches!(
            result.unwrap_err(),
            SuggestionError::ProviderFailed(CompletionError::Rejected { status: 503 })
        ));
    }

    #[tokio::test]
    async fn should_fail_when_output_does_not_match_schema() {
        let mut provider = MockProvider::new();
        provider
            .expect_complete()
            .returning(|_, _| Ok(Some(json!({"suggestions": [{"dishName": "Naan"}]}))));

        let result = use_case(provider).execute(params()).await;

        assert!(matches!(result.unwrap_err(), SuggestionError::InvalidOutput));
    }

    #[tokio::test]
    async fn should_embed_example_quantities_in_prompt() {
        let mut provider = MockProvider::new();
        provider
            .expect_complete()
            .withf(|prompt, _| {
                prompt.contains("Approx. 44 portions")
                    && prompt.contains("Approx. 55 portions")
                    && prompt.contains("Approx. 11 portions")
                    && prompt.contains("Approx. 80 portions")
            })
            .times(1)
            .returning(|_, _| Ok(None));

        let result = use_case(provider).execute(params()).await;

        assert!(result.is_ok());
    }
}
