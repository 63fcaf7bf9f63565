use std::env;

use openai::client::{DEFAULT_BASE_URL, DEFAULT_MODEL};

use super::error::ConfigError;

/// Configuration for OpenAI API access.
///
/// Environment variables:
/// - OPENAI_API_KEY: API key (required)
/// - OPENAI_MODEL: chat model (default: "gpt-4o-mini")
/// - OPENAI_BASE_URL: API root (default: "https://api.openai.com/v1")
pub struct OpenAIConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl OpenAIConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            env::var("OPENAI_API_KEY").ok(),
            env::var("OPENAI_MODEL").ok(),
            env::var("OPENAI_BASE_URL").ok(),
        )
    }

    fn from_vars(
        api_key: Option<String>,
        model: Option<String>,
        base_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingVariable("OPENAI_API_KEY"))?;

        Ok(Self {
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_require_api_key() {
        let result = OpenAIConfig::from_vars(Some(" ".to_string()), None, None);
        assert_eq!(
            result.err(),
            Some(ConfigError::MissingVariable("OPENAI_API_KEY"))
        );
    }

    #[test]
    fn should_default_model_and_base_url() {
        let config = OpenAIConfig::from_vars(Some("sk-test".to_string()), None, None).unwrap();

        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
