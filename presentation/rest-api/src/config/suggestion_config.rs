use std::env;
use std::time::Duration;

use business::domain::suggestion::model::SuggestionContext;

use super::error::{ConfigError, parse_var};

const DEFAULT_HISTORICAL_WASTE: f64 = 0.08;
const DEFAULT_EVENT_MULTIPLIER: f64 = 1.0;
const DEFAULT_DAY_FACTOR: &str = "Mid-week: standard demand, consider overall counts.";
const DEFAULT_TIMEOUT_SECS: u64 = 45;

/// Default context factors for the kitchen flow and the caller-side timeout.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionConfig {
    pub default_context: SuggestionContext,
    pub timeout: Duration,
}

impl SuggestionConfig {
    /// Environment variables:
    /// - SUGGESTION_HISTORICAL_WASTE (default: 0.08)
    /// - SUGGESTION_EVENT_MULTIPLIER (default: 1.0)
    /// - SUGGESTION_DAY_FACTOR (default: mid-week hint)
    /// - SUGGESTION_TIMEOUT_SECS (default: 45)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            env::var("SUGGESTION_HISTORICAL_WASTE").ok(),
            env::var("SUGGESTION_EVENT_MULTIPLIER").ok(),
            env::var("SUGGESTION_DAY_FACTOR").ok(),
            env::var("SUGGESTION_TIMEOUT_SECS").ok(),
        )
    }

    fn from_vars(
        waste: Option<String>,
        multiplier: Option<String>,
        day_factor: Option<String>,
        timeout_secs: Option<String>,
    ) -> Result<Self, ConfigError> {
        let waste = parse_var("SUGGESTION_HISTORICAL_WASTE", waste)?
            .unwrap_or(DEFAULT_HISTORICAL_WASTE);
        let multiplier = parse_var("SUGGESTION_EVENT_MULTIPLIER", multiplier)?
            .unwrap_or(DEFAULT_EVENT_MULTIPLIER);
        let timeout_secs = parse_var("SUGGESTION_TIMEOUT_SECS", timeout_secs)?
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let day_factor = day_factor
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DAY_FACTOR.to_string());

        Ok(Self {
            default_context: SuggestionContext {
                historical_waste_percentage: Some(waste),
                special_event_multiplier: Some(multiplier),
                day_of_week_factor: Some(day_factor),
            },
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Applies per-request overrides on top of the configured defaults.
    pub fn context_with(
        &self,
        historical_waste_percentage: Option<f64>,
        special_event_multiplier: Option<f64>,
        day_of_week_factor: Option<String>,
    ) -> SuggestionContext {
        let defaults = &self.default_context;
        SuggestionContext {
            historical_waste_percentage: historical_waste_percentage
                .or(defaults.historical_waste_percentage),
            special_event_multiplier: special_event_multiplier
                .or(defaults.special_event_multiplier),
            day_of_week_factor: day_of_week_factor.or_else(|| defaults.day_of_week_factor.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_kitchen_defaults() {
        let config = SuggestionConfig::from_vars(None, None, None, None).unwrap();

        assert_eq!(config.timeout, Duration::from_secs(45));
        assert_eq!(config.default_context.historical_waste_percentage, Some(0.08));
        assert_eq!(config.default_context.special_event_multiplier, Some(1.0));
        assert_eq!(
            config.default_context.day_of_week_factor.as_deref(),
            Some(DEFAULT_DAY_FACTOR)
        );
    }

    #[test]
    fn should_override_only_given_factors() {
        let config = SuggestionConfig::from_vars(None, None, None, None).unwrap();

        let context = config.context_with(None, Some(1.5), None);

        assert_eq!(context.historical_waste_percentage, Some(0.08));
        assert_eq!(context.special_event_multiplier, Some(1.5));
    }

    #[test]
    fn should_reject_non_numeric_multiplier() {
        let result = SuggestionConfig::from_vars(None, Some("double".to_string()), None, None);
        assert!(result.is_err());
    }
}
