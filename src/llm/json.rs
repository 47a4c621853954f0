use serde_json::Value;
use crate::errors::SmartdoError;

/// Pull a JSON value out of model text. Models asked for JSON still wrap it
/// in code fences or prose now and then.
pub fn extract_json(text: &str) -> Result<Value, SmartdoError> {
    let trimmed = text.trim();

    // Try direct parse first
    if let Ok(v) = serde_json::from_str::<Value>(trimmed) {
        return Ok(v);
    }

    // Strip markdown code fences if present
    let stripped = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|s| s.trim_end().strip_suffix("```"))
        .unwrap_or(trimmed)
        .trim();
    if let Ok(v) = serde_json::from_str::<Value>(stripped) {
        return Ok(v);
    }

    // Extract JSON object from the response text
    if let (Some(start), Some(end)) = (stripped.find('{'), stripped.rfind('}')) {
        if start < end {
            return serde_json::from_str::<Value>(&stripped[start..=end])
                .map_err(|e| SmartdoError::LLMApi(format!("JSON parse error: {}", e)));
        }
    }

    Err(SmartdoError::LLMApi("No valid JSON in model response".into()))
}
