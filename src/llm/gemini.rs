use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use crate::errors::SmartdoError;
use super::json::extract_json;
use super::provider::LLMProvider;
use super::types::StructuredRequest;
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GeminiProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiProvider {
    pub fn new(api_key: &str, model: Option<&str>) -> Self {
        Self::with_base_url(api_key, model, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: &str, model: Option<&str>, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            model: model.unwrap_or("gemini-2.5-flash").to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The key travels in the `x-goog-api-key` header, never in the URL.
    pub(crate) fn build_request(&self, request: &StructuredRequest) -> Result<reqwest::Request, SmartdoError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        self.client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&build_body(request)?)
            .build()
            .map_err(|e| SmartdoError::Internal(format!("Failed to build Gemini request: {}", e.without_url())))
    }
}

/// Build the `generateContent` body. The output schema is enforced natively
/// through `responseJsonSchema`; safety settings are only sent when the flow
/// overrides a category.
pub(crate) fn build_body(request: &StructuredRequest) -> Result<Value, SmartdoError> {
    let mut body = json!({
        "contents": [{"role": "user", "parts": [{"text": request.prompt}]}],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseJsonSchema": request.schema,
            "maxOutputTokens": 8192,
        }
    });

    if !request.config.safety_settings.is_empty() {
        body["safetySettings"] = serde_json::to_value(&request.config.safety_settings)?;
    }

    Ok(body)
}

/// Turn a `generateContent` response into the structured answer, or `None`
/// when the model was blocked or produced no text.
pub(crate) fn parse_response(data: &Value) -> Result<Option<Value>, SmartdoError> {
    if let Some(error) = data.get("error") {
        return Err(SmartdoError::LLMApi(
            error["message"].as_str().unwrap_or("Unknown Gemini error").to_string(),
        ));
    }

    if let Some(reason) = data["promptFeedback"]["blockReason"].as_str() {
        warn!(block_reason = %reason, "Gemini blocked the prompt");
        return Ok(None);
    }

    let candidate = &data["candidates"][0];
    let text: String = candidate["content"]["parts"]
        .as_array()
        .map(|parts| {
            parts
                .iter()
                .filter(|p| !p["thought"].as_bool().unwrap_or(false))
                .filter_map(|p| p["text"].as_str())
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        debug!(
            finish_reason = candidate["finishReason"].as_str().unwrap_or("none"),
            "Gemini returned no text"
        );
        return Ok(None);
    }

    extract_json(&text).map(Some)
}

#[async_trait]
impl LLMProvider for GeminiProvider {
    async fn complete_structured(&self, request: &StructuredRequest) -> Result<Option<Value>, SmartdoError> {
        let http_request = self.build_request(request)?;

        debug!(flow = %request.name, model = %self.model, "Sending Gemini request");

        let resp = self.client.execute(http_request)
            .await
            .map_err(|e| SmartdoError::Network(format!("Gemini request failed: {}", e.without_url())))?;

        match resp.status().as_u16() {
            429 => return Err(SmartdoError::RateLimit("Gemini rate limit".into())),
            401 | 403 => return Err(SmartdoError::Authentication("Invalid Gemini API key".into())),
            _ => {}
        }

        let data: Value = resp.json().await
            .map_err(|e| SmartdoError::LLMApi(format!("Parse error: {}", e.without_url())))?;

        parse_response(&data)
    }

    fn provider_name(&self) -> &str { "gemini" }
    fn model_name(&self) -> &str { &self.model }
}
