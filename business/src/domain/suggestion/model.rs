use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::check_in::model::CheckInSummary;

pub const SUGGESTION_ERROR_NAME: &str = "Suggestion Error";
pub const ADHERENCE_ERROR_NAME: &str = "Suggestion Adherence Error";

const SUGGESTION_ERROR_NOTE: &str = "Could not generate suggestions at this time. Input counts might be too low or the model is recalibrating.";
const ADHERENCE_ERROR_NOTE: &str =
    "AI failed to adhere to the available dish list. Please retry or check the prompt.";

/// Input of a single quantity-suggestion run.
///
/// The diet counts are independent of `total_check_ins`; nothing checks that
/// they add up.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestionRequest {
    pub total_check_ins: u32,
    pub veg_count: u32,
    pub non_veg_count: u32,
    pub vegan_count: u32,
    /// Fraction of food wasted on similar days, e.g. `0.08` for 8%.
    pub historical_waste_percentage: Option<f64>,
    /// Demand multiplier for special events, `1.0` meaning a normal day.
    pub special_event_multiplier: Option<f64>,
    pub day_of_week_factor: Option<String>,
}

impl SuggestionRequest {
    pub fn from_summary(summary: &CheckInSummary, context: SuggestionContext) -> Self {
        Self {
            total_check_ins: summary.total_check_ins,
            veg_count: summary.veg_count,
            non_veg_count: summary.non_veg_count,
            vegan_count: summary.vegan_count,
            historical_waste_percentage: context.historical_waste_percentage,
            special_event_multiplier: context.special_event_multiplier,
            day_of_week_factor: context.day_of_week_factor,
        }
    }

    /// The caller's multiplier, if it is usable. Zero, negative and
    /// non-finite values count as not provided.
    pub fn provided_multiplier(&self) -> Option<f64> {
        self.special_event_multiplier
            .filter(|m| m.is_finite() && *m > 0.0)
    }

    /// Multiplier actually applied, 1.0 unless a usable one was provided.
    pub fn effective_multiplier(&self) -> f64 {
        self.provided_multiplier().unwrap_or(1.0)
    }

    /// Historical waste as a whole-percent string, e.g. `0.08` -> `"8%"`.
    pub fn processed_historical_waste(&self) -> Option<String> {
        self.historical_waste_percentage
            .map(|w| format!("{}%", (w * 100.0).round() as i64))
    }
}

/// Contextual factors layered on top of the check-in counts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestionContext {
    pub historical_waste_percentage: Option<f64>,
    pub special_event_multiplier: Option<f64>,
    pub day_of_week_factor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishSuggestion {
    pub dish_name: String,
    pub quantity: String,
    pub note: String,
}

impl DishSuggestion {
    fn sentinel(dish_name: &str, note: &str) -> Self {
        Self {
            dish_name: dish_name.to_string(),
            quantity: "N/A".to_string(),
            note: note.to_string(),
        }
    }
}

/// Structured answer expected from the completion provider.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuggestionsOutput {
    #[serde(default)]
    pub suggestions: Vec<DishSuggestion>,
}

impl SuggestionsOutput {
    /// JSON Schema handed to the provider alongside the prompt.
    pub fn json_schema() -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "suggestions": {
                    "type": "array",
                    "description": "An array of dish preparation suggestions.",
                    "items": {
                        "type": "object",
                        "properties": {
                            "dishName": {
                                "type": "string",
                                "description": "The name of the dish to prepare. MUST be one of the available dish names."
                            },
                            "quantity": {
                                "type": "string",
                                "description": "Suggested quantity, e.g. \"Approx. 15 portions\" or \"N/A (0 preference)\"."
                            },
                            "note": {
                                "type": "string",
                                "description": "Reasoning for the suggestion, including waste or event factors when provided."
                            }
                        },
                        "required": ["dishName", "quantity", "note"],
                        "additionalProperties": false
                    }
                }
            },
            "required": ["suggestions"],
            "additionalProperties": false
        })
    }
}

/// Result of a suggestion run once the provider has answered.
#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionOutcome {
    /// Every suggestion names a catalog dish. Never empty.
    Suggested(Vec<DishSuggestion>),
    /// The provider answered with no suggestions.
    Empty,
    /// At least one suggestion named a dish outside the catalog; the whole batch was dropped.
    AdherenceViolation { rejected: Vec<String> },
}

impl SuggestionOutcome {
    /// Validates a provider batch against the catalog. All or nothing.
    pub fn from_provider(suggestions: Vec<DishSuggestion>, catalog_names: &[String]) -> Self {
        if suggestions.is_empty() {
            return SuggestionOutcome::Empty;
        }

        let allowed: HashSet<&str> = catalog_names.iter().map(String::as_str).collect();
        let rejected: Vec<String> = suggestions
            .iter()
            .filter(|s| !allowed.contains(s.dish_name.as_str()))
            .map(|s| s.dish_name.clone())
            .collect();

        if rejected.is_empty() {
            SuggestionOutcome::Suggested(suggestions)
        } else {
            SuggestionOutcome::AdherenceViolation { rejected }
        }
    }

    pub fn is_degraded(&self) -> bool {
        !matches!(self, SuggestionOutcome::Suggested(_))
    }

    /// Flattens the outcome into a renderable list; degraded outcomes become a single sentinel.
    pub fn into_suggestions(self) -> Vec<DishSuggestion> {
        match self {
            SuggestionOutcome::Suggested(suggestions) => suggestions,
            SuggestionOutcome::Empty => vec![DishSuggestion::sentinel(
                SUGGESTION_ERROR_NAME,
                SUGGESTION_ERROR_NOTE,
            )],
            SuggestionOutcome::AdherenceViolation { .. } => vec![DishSuggestion::sentinel(
                ADHERENCE_ERROR_NAME,
                ADHERENCE_ERROR_NOTE,
            )],
        }
    }
}

/// What the kitchen dashboard gets back: the counts used and the outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct KitchenSuggestions {
    pub summary: CheckInSummary,
    pub outcome: SuggestionOutcome,
}
