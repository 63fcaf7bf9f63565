use std::time::Duration;

use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Shared OpenAI HTTP client configuration.
pub struct OpenAIClient {
    pub client: Client,
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl OpenAIClient {
    pub fn new(api_key: String, model: String, base_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        }
    }

    /// Builds the authorization header value.
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// Returns the chat completions endpoint URL.
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_endpoint_without_double_slash() {
        let client = OpenAIClient::new(
            "sk-test".to_string(),
            DEFAULT_MODEL.to_string(),
            "http://localhost:8080/v1/".to_string(),
            Duration::from_secs(5),
        );

        assert_eq!(
            client.chat_completions_url(),
            "http://localhost:8080/v1/chat/completions"
        );
        assert_eq!(client.auth_header(), "Bearer sk-test");
    }
}
