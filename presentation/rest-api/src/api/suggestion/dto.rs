use poem_openapi::Object;

use business::domain::suggestion::model::{
    DishSuggestion, KitchenSuggestions, SuggestionOutcome, SuggestionRequest,
};

use crate::api::check_in::dto::CheckInSummaryResponse;

#[derive(Debug, Clone, Object)]
pub struct SuggestionRequestBody {
    pub total_check_ins: u32,
    pub veg_count: u32,
    pub non_veg_count: u32,
    pub vegan_count: u32,
    /// Fraction of food wasted on similar days, e.g. 0.08
    #[oai(skip_serializing_if_is_none)]
    pub historical_waste_percentage: Option<f64>,
    /// Demand multiplier for special events, 1.0 for a normal day
    #[oai(skip_serializing_if_is_none)]
    pub special_event_multiplier: Option<f64>,
    /// Free-text hint about the day, e.g. "Friday: lower attendance"
    #[oai(skip_serializing_if_is_none)]
    pub day_of_week_factor: Option<String>,
}

impl From<SuggestionRequestBody> for SuggestionRequest {
    fn from(body: SuggestionRequestBody) -> Self {
        Self {
            total_check_ins: body.total_check_ins,
            veg_count: body.veg_count,
            non_veg_count: body.non_veg_count,
            vegan_count: body.vegan_count,
            historical_waste_percentage: body.historical_waste_percentage,
            special_event_multiplier: body.special_event_multiplier,
            day_of_week_factor: body.day_of_week_factor,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct DishSuggestionResponse {
    /// Catalog dish name, or a sentinel such as "Suggestion Error"
    pub dish_name: String,
    /// e.g. "Approx. 44 portions" or "N/A"
    pub quantity: String,
    pub note: String,
}

impl From<DishSuggestion> for DishSuggestionResponse {
    fn from(s: DishSuggestion) -> Self {
        Self {
            dish_name: s.dish_name,
            quantity: s.quantity,
            note: s.note,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SuggestionsResponse {
    /// True when `suggestions` holds a single sentinel entry instead of dishes
    pub degraded: bool,
    pub suggestions: Vec<DishSuggestionResponse>,
}

impl From<SuggestionOutcome> for SuggestionsResponse {
    fn from(outcome: SuggestionOutcome) -> Self {
        Self {
            degraded: outcome.is_degraded(),
            suggestions: outcome
                .into_suggestions()
                .into_iter()
                .map(|s| s.into())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct KitchenSuggestionsResponse {
    /// Head counts the suggestions were computed from
    pub based_on: CheckInSummaryResponse,
    pub degraded: bool,
    pub suggestions: Vec<DishSuggestionResponse>,
}

impl From<KitchenSuggestions> for KitchenSuggestionsResponse {
    fn from(k: KitchenSuggestions) -> Self {
        let SuggestionsResponse {
            degraded,
            suggestions,
        } = k.outcome.into();
        Self {
            based_on: k.summary.into(),
            degraded,
            suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::suggestion::model::ADHERENCE_ERROR_NAME;

    #[test]
    fn should_flag_sentinel_response_as_degraded() {
        let response: SuggestionsResponse = SuggestionOutcome::AdherenceViolation {
            rejected: vec!["Pizza".to_string()],
        }
        .into();

        assert!(response.degraded);
        assert_eq!(response.suggestions.len(), 1);
        assert_eq!(response.suggestions[0].dish_name, ADHERENCE_ERROR_NAME);
        assert_eq!(response.suggestions[0].quantity, "N/A");
    }

    #[test]
    fn should_pass_real_suggestions_through() {
        let response: SuggestionsResponse = SuggestionOutcome::Suggested(vec![DishSuggestion {
            dish_name: "Naan".to_string(),
            quantity: "Approx. 80 portions".to_string(),
            note: "staple".to_string(),
        }])
        .into();

        assert!(!response.degraded);
        assert_eq!(response.suggestions[0].dish_name, "Naan");
    }
}
