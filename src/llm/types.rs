use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Harm categories understood by the Gemini safety filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HarmCategory {
    #[serde(rename = "HARM_CATEGORY_HARASSMENT")]
    Harassment,
    #[serde(rename = "HARM_CATEGORY_HATE_SPEECH")]
    HateSpeech,
    #[serde(rename = "HARM_CATEGORY_SEXUALLY_EXPLICIT")]
    SexuallyExplicit,
    #[serde(rename = "HARM_CATEGORY_DANGEROUS_CONTENT")]
    DangerousContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmBlockThreshold {
    BlockLowAndAbove,
    BlockMediumAndAbove,
    BlockOnlyHigh,
    BlockNone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetySetting {
    pub category: HarmCategory,
    pub threshold: HarmBlockThreshold,
}

/// Per-call options passed through to the provider. Categories not listed
/// in `safety_settings` stay at the provider's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallConfig {
    pub safety_settings: Vec<SafetySetting>,
}

impl CallConfig {
    pub fn with_safety(mut self, category: HarmCategory, threshold: HarmBlockThreshold) -> Self {
        self.safety_settings.push(SafetySetting { category, threshold });
        self
    }
}

/// One structured completion request: a rendered prompt plus the JSON schema
/// the answer must satisfy.
#[derive(Debug, Clone)]
pub struct StructuredRequest {
    /// Flow name, used for logging and as the schema name where a provider wants one.
    pub name: String,
    pub prompt: String,
    pub schema: Value,
    pub config: CallConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safety_setting_wire_names() {
        let setting = SafetySetting {
            category: HarmCategory::DangerousContent,
            threshold: HarmBlockThreshold::BlockOnlyHigh,
        };
        let json = serde_json::to_value(&setting).unwrap();
        assert_eq!(json["category"], "HARM_CATEGORY_DANGEROUS_CONTENT");
        assert_eq!(json["threshold"], "BLOCK_ONLY_HIGH");
    }

    #[test]
    fn test_call_config_default_is_empty() {
        assert!(CallConfig::default().safety_settings.is_empty());
    }
}
