use serde::{Deserialize, Serialize};
use crate::llm::catalog;
use super::credentials::resolve_credential;

pub const DEFAULT_PROVIDER: &str = "gemini";
pub const DEFAULT_DB_PATH: &str = "./data/smartdo.db";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct SmartdoConfig {
    pub llm: Option<LLMConfig>,
    pub storage: Option<StorageConfig>,
    pub server: Option<ServerConfig>,
    pub prompts: Option<PromptsConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct LLMConfig {
    pub provider: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct StorageConfig {
    pub path: Option<String>,
    pub seed_samples: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct PromptsConfig {
    pub dir: Option<String>,
}

/// Provider settings after defaults and environment lookups are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLLM {
    pub provider: String,
    pub model: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

impl SmartdoConfig {
    /// `$VAR` references resolve from the environment; a missing key falls
    /// back to the provider's own environment variable.
    pub fn resolved_llm(&self) -> ResolvedLLM {
        let llm = self.llm.clone().unwrap_or_default();
        let provider = llm.provider.unwrap_or_else(|| DEFAULT_PROVIDER.to_string());
        let model = llm
            .model
            .map(|m| resolve_credential(&m))
            .unwrap_or_else(|| catalog::get_default_model(&provider).to_string());
        let api_key = llm
            .api_key
            .map(|k| resolve_credential(&k))
            .filter(|k| !k.is_empty() && !k.starts_with('$'))
            .or_else(|| catalog::api_key_from_env(&provider));
        let base_url = llm.base_url.map(|u| resolve_credential(&u));

        ResolvedLLM { provider, model, api_key, base_url }
    }

    pub fn db_path(&self) -> String {
        self.storage
            .as_ref()
            .and_then(|s| s.path.clone())
            .unwrap_or_else(|| DEFAULT_DB_PATH.to_string())
    }

    pub fn seed_samples(&self) -> bool {
        self.storage.as_ref().and_then(|s| s.seed_samples).unwrap_or(true)
    }

    pub fn host(&self) -> String {
        self.server
            .as_ref()
            .and_then(|s| s.host.clone())
            .unwrap_or_else(|| DEFAULT_HOST.to_string())
    }

    pub fn port(&self) -> u16 {
        self.server.as_ref().and_then(|s| s.port).unwrap_or(DEFAULT_PORT)
    }

    pub fn prompts_dir(&self) -> Option<String> {
        self.prompts.as_ref().and_then(|p| p.dir.clone())
    }

    /// Apply command-line overrides on top of file values.
    pub fn with_overrides(mut self, provider: Option<String>, model: Option<String>, db: Option<String>) -> Self {
        if provider.is_some() || model.is_some() {
            let llm = self.llm.get_or_insert_with(LLMConfig::default);
            if let Some(p) = provider {
                if llm.provider.as_deref() != Some(p.as_str()) {
                    // A model named for another provider no longer applies.
                    if model.is_none() {
                        llm.model = None;
                    }
                    llm.api_key = None;
                }
                llm.provider = Some(p);
            }
            if let Some(m) = model {
                llm.model = Some(m);
            }
        }
        if let Some(path) = db {
            self.storage.get_or_insert_with(StorageConfig::default).path = Some(path);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SmartdoConfig::default();
        assert_eq!(config.db_path(), DEFAULT_DB_PATH);
        assert_eq!(config.port(), 8080);
        assert_eq!(config.host(), "127.0.0.1");
        assert!(config.seed_samples());
        assert!(config.prompts_dir().is_none());
    }

    #[test]
    fn test_resolved_llm_defaults_model_from_catalog() {
        let config = SmartdoConfig {
            llm: Some(LLMConfig { provider: Some("openai".into()), api_key: Some("sk-test".into()), ..Default::default() }),
            ..Default::default()
        };
        let llm = config.resolved_llm();
        assert_eq!(llm.provider, "openai");
        assert_eq!(llm.model, "gpt-4o-mini");
        assert_eq!(llm.api_key.as_deref(), Some("sk-test"));
    }

    #[test]
    fn test_resolved_llm_env_reference() {
        std::env::set_var("SMARTDO_TEST_KEY_REF", "from-env");
        let config = SmartdoConfig {
            llm: Some(LLMConfig { api_key: Some("$SMARTDO_TEST_KEY_REF".into()), ..Default::default() }),
            ..Default::default()
        };
        assert_eq!(config.resolved_llm().api_key.as_deref(), Some("from-env"));
        std::env::remove_var("SMARTDO_TEST_KEY_REF");
    }

    #[test]
    fn test_unset_env_reference_is_not_a_key() {
        let config = SmartdoConfig {
            llm: Some(LLMConfig {
                provider: Some("local".into()),
                api_key: Some("$SMARTDO_TEST_UNSET_VAR".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(config.resolved_llm().api_key.is_none());
    }

    #[test]
    fn test_overrides_replace_provider_and_db() {
        let config = SmartdoConfig {
            llm: Some(LLMConfig {
                provider: Some("openai".into()),
                model: Some("gpt-4o".into()),
                api_key: Some("sk-test".into()),
                ..Default::default()
            }),
            ..Default::default()
        }
        .with_overrides(Some("stub".into()), None, Some("/tmp/x.db".into()));

        let llm = config.resolved_llm();
        assert_eq!(llm.provider, "stub");
        assert_eq!(llm.model, "stub");
        assert!(llm.api_key.is_none());
        assert_eq!(config.db_path(), "/tmp/x.db");
    }
}
