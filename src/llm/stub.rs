use std::sync::Mutex;
use async_trait::async_trait;
use serde_json::Value;
use crate::errors::SmartdoError;
use super::provider::LLMProvider;
use super::types::StructuredRequest;

#[derive(Debug, Clone)]
enum StubBehavior {
    Respond(Value),
    Empty,
    Fail(String),
}

/// In-process provider with a scripted answer. Every request it sees is
/// recorded so callers can assert on what was (or was not) sent.
pub struct StubProvider {
    behavior: StubBehavior,
    calls: Mutex<Vec<StructuredRequest>>,
}

impl StubProvider {
    /// Always answer with `value`.
    pub fn returning(value: Value) -> Self {
        Self::with_behavior(StubBehavior::Respond(value))
    }

    /// Always answer with no structured output.
    pub fn empty() -> Self {
        Self::with_behavior(StubBehavior::Empty)
    }

    /// Always fail as if the completion call threw.
    pub fn failing(message: &str) -> Self {
        Self::with_behavior(StubBehavior::Fail(message.to_string()))
    }

    fn with_behavior(behavior: StubBehavior) -> Self {
        Self { behavior, calls: Mutex::new(Vec::new()) }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn last_request(&self) -> Option<StructuredRequest> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).last().cloned()
    }
}

#[async_trait]
impl LLMProvider for StubProvider {
    async fn complete_structured(&self, request: &StructuredRequest) -> Result<Option<Value>, SmartdoError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(request.clone());

        match &self.behavior {
            StubBehavior::Respond(value) => Ok(Some(value.clone())),
            StubBehavior::Empty => Ok(None),
            StubBehavior::Fail(message) => Err(SmartdoError::LLMApi(message.clone())),
        }
    }

    fn provider_name(&self) -> &str { "stub" }
    fn model_name(&self) -> &str { "stub" }
}
