use async_trait::async_trait;

use super::errors::CompletionError;

/// Service port for the external natural-language completion provider.
///
/// `output_schema` is a JSON Schema document the structured answer must
/// conform to. `Ok(None)` means the provider answered without any
/// structured output.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(
        &self,
        prompt: &str,
        output_schema: &serde_json::Value,
    ) -> Result<Option<serde_json::Value>, CompletionError>;
}
