use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::catalog::model::DishCatalog;
use business::domain::suggestion::use_cases::generate::{
    GenerateKitchenSuggestionsParams, GenerateKitchenSuggestionsUseCase,
};
use business::domain::suggestion::use_cases::suggest::{
    SuggestDishQuantitiesParams, SuggestDishQuantitiesUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::suggestion::dto::{
    KitchenSuggestionsResponse, SuggestionRequestBody, SuggestionsResponse,
};
use crate::api::tags::ApiTags;
use crate::config::suggestion_config::SuggestionConfig;

pub struct SuggestionApi {
    generate_use_case: Arc<dyn GenerateKitchenSuggestionsUseCase>,
    suggest_use_case: Arc<dyn SuggestDishQuantitiesUseCase>,
    catalog: &'static DishCatalog,
    config: SuggestionConfig,
}

impl SuggestionApi {
    pub fn new(
        generate_use_case: Arc<dyn GenerateKitchenSuggestionsUseCase>,
        suggest_use_case: Arc<dyn SuggestDishQuantitiesUseCase>,
        catalog: &'static DishCatalog,
        config: SuggestionConfig,
    ) -> Self {
        Self {
            generate_use_case,
            suggest_use_case,
            catalog,
            config,
        }
    }

    fn timeout(&self) -> Duration {
        self.config.timeout
    }
}

fn timed_out() -> Json<ErrorResponse> {
    Json(ErrorResponse::new("Timeout", "suggestion.timeout"))
}

/// Dish preparation suggestion API
///
/// Suggests which catalog dishes to cook and how much, from check-in counts.
/// Degraded answers come back as a single sentinel suggestion with
/// `degraded: true`.
#[OpenApi]
impl SuggestionApi {
    /// Suggest dishes from today's check-ins
    ///
    /// Counts today's check-ins and asks the planner for quantities. Context
    /// factors default to the server configuration and can be overridden.
    #[oai(path = "/suggestions", method = "get", tag = "ApiTags::Suggestions")]
    async fn get_kitchen_suggestions(
        &self,
        /// Fraction of food wasted on similar days, e.g. 0.08
        historical_waste_percentage: Query<Option<f64>>,
        /// Demand multiplier for special events
        special_event_multiplier: Query<Option<f64>>,
        /// Free-text hint about the day
        day_of_week_factor: Query<Option<String>>,
    ) -> GetKitchenSuggestionsResponse {
        let params = GenerateKitchenSuggestionsParams {
            date: Utc::now().date_naive(),
            context: self.config.context_with(
                historical_waste_percentage.0,
                special_event_multiplier.0,
                day_of_week_factor.0,
            ),
        };

        let result =
            tokio::time::timeout(self.timeout(), self.generate_use_case.execute(params)).await;

        match result {
            Err(_) => {
                tracing::error!("Kitchen suggestions timed out after {:?}", self.timeout());
                GetKitchenSuggestionsResponse::GatewayTimeout(timed_out())
            }
            Ok(Ok(suggestions)) => GetKitchenSuggestionsResponse::Ok(Json(suggestions.into())),
            Ok(Err(err)) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    422 => GetKitchenSuggestionsResponse::UnprocessableEntity(json),
                    502 => GetKitchenSuggestionsResponse::BadGateway(json),
                    _ => GetKitchenSuggestionsResponse::InternalError(json),
                }
            }
        }
    }

    /// Suggest dishes for explicit counts
    ///
    /// Runs the planner on the given counts and context factors against the
    /// standard dish catalog.
    #[oai(path = "/suggestions", method = "post", tag = "ApiTags::Suggestions")]
    async fn suggest(&self, body: Json<SuggestionRequestBody>) -> SuggestResponse {
        let params = SuggestDishQuantitiesParams {
            request: body.0.into(),
            catalog_names: self.catalog.all_names(),
        };

        let result =
            tokio::time::timeout(self.timeout(), self.suggest_use_case.execute(params)).await;

        match result {
            Err(_) => {
                tracing::error!("Dish suggestions timed out after {:?}", self.timeout());
                SuggestResponse::GatewayTimeout(timed_out())
            }
            Ok(Ok(outcome)) => SuggestResponse::Ok(Json(outcome.into())),
            Ok(Err(err)) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    502 => SuggestResponse::BadGateway(json),
                    _ => SuggestResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetKitchenSuggestionsResponse {
    #[oai(status = 200)]
    Ok(Json<KitchenSuggestionsResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 504)]
    GatewayTimeout(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SuggestResponse {
    #[oai(status = 200)]
    Ok(Json<SuggestionsResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 504)]
    GatewayTimeout(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::domain::suggestion::errors::SuggestionError;
    use business::domain::suggestion::model::{
        KitchenSuggestions, SuggestionContext, SuggestionOutcome,
    };
    use poem_openapi::OpenApiService;
    use serde_json::Value;

    struct NoCheckInsToday;

    #[async_trait]
    impl GenerateKitchenSuggestionsUseCase for NoCheckInsToday {
        async fn execute(
            &self,
            _params: GenerateKitchenSuggestionsParams,
        ) -> Result<KitchenSuggestions, SuggestionError> {
            Err(SuggestionError::NoCheckIns)
        }
    }

    struct EmptyEngine;

    #[async_trait]
    impl SuggestDishQuantitiesUseCase for EmptyEngine {
        async fn execute(
            &self,
            _params: SuggestDishQuantitiesParams,
        ) -> Result<SuggestionOutcome, SuggestionError> {
            Ok(SuggestionOutcome::Empty)
        }
    }

    fn spec() -> Value {
        let api = SuggestionApi::new(
            Arc::new(NoCheckInsToday),
            Arc::new(EmptyEngine),
            DishCatalog::standard(),
            SuggestionConfig {
                default_context: SuggestionContext::default(),
                timeout: Duration::from_secs(1),
            },
        );
        serde_json::from_str(&OpenApiService::new(api, "SmartServe Kitchen API", "test").spec())
            .unwrap()
    }

    #[test]
    fn should_name_query_overrides_like_body_fields() {
        let spec = spec();

        let query: Vec<&str> = spec["paths"]["/suggestions"]["get"]["parameters"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            query,
            vec![
                "historical_waste_percentage",
                "special_event_multiplier",
                "day_of_week_factor"
            ]
        );

        let body = &spec["components"]["schemas"]["SuggestionRequestBody"]["properties"];
        for name in query {
            assert!(body.get(name).is_some(), "body has no {name}");
        }
    }
}
