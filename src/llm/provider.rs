use async_trait::async_trait;
use serde_json::Value;
use crate::errors::SmartdoError;
use super::types::StructuredRequest;

#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Structured JSON completion. `Ok(None)` means the model produced no
    /// structured output at all (blocked or empty candidate).
    async fn complete_structured(
        &self,
        request: &StructuredRequest,
    ) -> Result<Option<Value>, SmartdoError>;

    /// Provider name for logging
    fn provider_name(&self) -> &str;

    /// Model identifier
    fn model_name(&self) -> &str;
}
