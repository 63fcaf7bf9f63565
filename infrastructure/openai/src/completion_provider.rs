use async_trait::async_trait;
use serde_json::{Value, json};

use business::domain::suggestion::errors::CompletionError;
use business::domain::suggestion::services::CompletionProvider;

use crate::client::OpenAIClient;

const SYSTEM_PROMPT: &str = r#"You are an expert AI assistant for a corporate kitchen, specializing in food preparation planning and waste reduction.
You only ever suggest dishes from the list the kitchen provides, spelled exactly as given.
Answer with JSON that matches the requested schema and nothing else."#;

const SCHEMA_NAME: &str = "dish_suggestions";

/// Chat-completions backed provider using OpenAI structured outputs.
pub struct OpenAICompletionProvider {
    client: OpenAIClient,
}

impl OpenAICompletionProvider {
    pub fn new(client: OpenAIClient) -> Self {
        Self { client }
    }

    fn build_body(&self, prompt: &str, output_schema: &Value) -> Value {
        json!({
            "model": self.client.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": prompt},
            ],
            "temperature": 0.2,
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": SCHEMA_NAME,
                    "strict": true,
                    "schema": output_schema,
                }
            }
        })
    }

    /// Extracts the structured answer from a message body.
    ///
    /// Blank content means the model produced nothing usable.
    fn parse_content(content: &str) -> Result<Option<Value>, CompletionError> {
        // Remove markdown code blocks if present
        let mut json_text = content.trim();
        if let Some(rest) = json_text.strip_prefix("```json") {
            json_text = rest;
        } else if let Some(rest) = json_text.strip_prefix("```") {
            json_text = rest;
        }
        let json_text = json_text.trim_end().trim_end_matches("```").trim();

        if json_text.is_empty() {
            return Ok(None);
        }

        serde_json::from_str(json_text)
            .map(Some)
            .map_err(|_| CompletionError::MalformedResponse)
    }
}

#[async_trait]
impl CompletionProvider for OpenAICompletionProvider {
    async fn complete(
        &self,
        prompt: &str,
        output_schema: &Value,
    ) -> Result<Option<Value>, CompletionError> {
        let body = self.build_body(prompt, output_schema);

        let response = self
            .client
            .client
            .post(self.client.chat_completions_url())
            .header("Content-Type", "application/json")
            .header("Authorization", self.client.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("OpenAI request failed: {}", e);
                CompletionError::Unreachable(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("OpenAI returned status {}", status);
            return Err(CompletionError::Rejected {
                status: status.as_u16(),
            });
        }

        let data: Value = response.json().await.map_err(|e| {
            tracing::error!("OpenAI response is not JSON: {}", e);
            CompletionError::MalformedResponse
        })?;

        let message = data["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .map(|choice| &choice["message"])
            .ok_or(CompletionError::MalformedResponse)?;

        if let Some(refusal) = message["refusal"].as_str() {
            tracing::warn!("OpenAI refused to answer: {}", refusal);
            return Ok(None);
        }

        match message["content"].as_str() {
            Some(content) => Self::parse_content(content),
            None => Ok(None),
        }
    }
}
