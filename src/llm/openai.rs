use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use crate::errors::SmartdoError;
use super::json::extract_json;
use super::provider::LLMProvider;
use super::types::StructuredRequest;
use tracing::debug;

/// OpenAI chat-completions client. Also drives OpenAI-compatible local
/// servers (Ollama, llama.cpp, vLLM) through [`OpenAIProvider::local`].
pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    name: &'static str,
}

impl OpenAIProvider {
    pub fn new(api_key: &str, model: Option<&str>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            model: model.unwrap_or("gpt-4o-mini").to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            name: "openai",
        }
    }

    pub fn local(base_url: &str, model: Option<&str>, api_key: &str) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            model: model.unwrap_or("qwen2.5:7b").to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            name: "local",
        }
    }
}

pub(crate) fn build_body(model: &str, request: &StructuredRequest) -> Value {
    json!({
        "model": model,
        "messages": [{"role": "user", "content": request.prompt}],
        "max_tokens": 4096,
        "response_format": {
            "type": "json_schema",
            "json_schema": {
                "name": request.name,
                "schema": request.schema,
                "strict": false,
            }
        },
    })
}

pub(crate) fn parse_response(data: &Value) -> Result<Option<Value>, SmartdoError> {
    if let Some(error) = data.get("error") {
        return Err(SmartdoError::LLMApi(
            error["message"].as_str().unwrap_or("Unknown").to_string(),
        ));
    }

    let message = &data["choices"][0]["message"];
    if let Some(refusal) = message["refusal"].as_str() {
        debug!(refusal = %refusal, "Model refused structured output");
        return Ok(None);
    }

    match message["content"].as_str() {
        Some(content) if !content.trim().is_empty() => extract_json(content).map(Some),
        _ => Ok(None),
    }
}

#[async_trait]
impl LLMProvider for OpenAIProvider {
    async fn complete_structured(&self, request: &StructuredRequest) -> Result<Option<Value>, SmartdoError> {
        if !request.config.safety_settings.is_empty() {
            debug!(provider = self.name, "Safety settings not supported, sending without them");
        }

        let body = build_body(&self.model, request);

        let mut builder = self.client
            .post(format!("{}/chat/completions", self.base_url))
            .json(&body);
        if !self.api_key.is_empty() {
            builder = builder.header("Authorization", format!("Bearer {}", self.api_key));
        }

        debug!(flow = %request.name, model = %self.model, provider = self.name, "Sending chat completion");

        let resp = builder
            .send()
            .await
            .map_err(|e| SmartdoError::Network(format!("{} request failed: {}", self.name, e)))?;

        let status = resp.status();
        if status.as_u16() == 429 {
            return Err(SmartdoError::RateLimit(format!("{} rate limit", self.name)));
        }
        if status.as_u16() == 401 {
            return Err(SmartdoError::Authentication(format!("Invalid {} API key", self.name)));
        }

        let data: Value = resp.json().await
            .map_err(|e| SmartdoError::LLMApi(format!("Failed to parse {} response: {}", self.name, e)))?;

        parse_response(&data)
    }

    fn provider_name(&self) -> &str { self.name }
    fn model_name(&self) -> &str { &self.model }
}
