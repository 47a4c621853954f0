use std::sync::Arc;
use crate::errors::SmartdoError;
use super::provider::LLMProvider;
use super::openai::OpenAIProvider;
use super::gemini::GeminiProvider;
use super::stub::StubProvider;
use super::catalog;

pub fn create_provider(
    provider_name: &str,
    api_key: Option<&str>,
    model: Option<&str>,
    base_url: Option<&str>,
) -> Result<Arc<dyn LLMProvider>, SmartdoError> {
    let info = catalog::get_provider(provider_name)
        .ok_or_else(|| SmartdoError::Config(format!("Unknown LLM provider: {}", provider_name)))?;

    let key = api_key.unwrap_or("");
    if info.needs_api_key && key.is_empty() {
        return Err(SmartdoError::Config(format!(
            "{} requires an API key (set {} or llm.api_key)",
            info.name, info.env_var
        )));
    }

    match info.id {
        "gemini" => Ok(match base_url {
            Some(url) => Arc::new(GeminiProvider::with_base_url(key, model, url)),
            None => Arc::new(GeminiProvider::new(key, model)),
        }),
        "openai" => Ok(Arc::new(OpenAIProvider::new(key, model))),
        "local" => {
            let url = base_url.unwrap_or("http://localhost:11434/v1");
            Ok(Arc::new(OpenAIProvider::local(url, model, key)))
        }
        "stub" => Ok(Arc::new(StubProvider::empty())),
        other => Err(SmartdoError::Config(format!("Unknown LLM provider: {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_provider() {
        let err = create_provider("anthropic", Some("k"), None, None).err().unwrap();
        assert!(matches!(err, SmartdoError::Config(_)));
    }

    #[test]
    fn test_gemini_requires_key() {
        assert!(create_provider("gemini", None, None, None).is_err());
        let provider = create_provider("gemini", Some("key"), None, None).unwrap();
        assert_eq!(provider.provider_name(), "gemini");
        assert_eq!(provider.model_name(), "gemini-2.5-flash");
    }

    #[test]
    fn test_local_without_key() {
        let provider = create_provider("local", None, Some("llama3"), None).unwrap();
        assert_eq!(provider.provider_name(), "local");
        assert_eq!(provider.model_name(), "llama3");
    }
}
