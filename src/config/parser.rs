use std::path::Path;
use crate::errors::SmartdoError;
use crate::llm::catalog;
use super::types::SmartdoConfig;
use super::schema::CONFIG_SCHEMA;
use tracing::warn;

const MAX_CONFIG_BYTES: u64 = 1_048_576;

pub async fn parse_config(path: &Path) -> Result<SmartdoConfig, SmartdoError> {
    if !path.exists() {
        return Err(SmartdoError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > MAX_CONFIG_BYTES {
        return Err(SmartdoError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    parse_config_str(&content)
}

pub fn parse_config_str(content: &str) -> Result<SmartdoConfig, SmartdoError> {
    // An empty file is a valid, all-defaults config.
    if content.trim().is_empty() {
        return Ok(SmartdoConfig::default());
    }

    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;

    validate_schema(&yaml)?;

    let config: SmartdoConfig = serde_yaml::from_value(yaml)?;

    validate_conflicts(&config)?;

    Ok(config)
}

/// Validate config against the JSON schema for structural correctness.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), SmartdoError> {
    let json_value = serde_json::to_value(yaml)
        .map_err(|e| SmartdoError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| SmartdoError::Config(format!("Schema compilation error: {}", e)))?;

    if let Err(errors) = compiled.validate(&json_value) {
        // Advisory only: typed parsing below is the hard check.
        for e in errors {
            warn!(validation_error = %format!("{} at {}", e, e.instance_path), "Config schema warning");
        }
    }

    Ok(())
}

/// Detect semantic problems in the parsed configuration.
fn validate_conflicts(config: &SmartdoConfig) -> Result<(), SmartdoError> {
    if let Some(llm) = &config.llm {
        if let Some(provider) = &llm.provider {
            if catalog::get_provider(provider).is_none() {
                let known: Vec<&str> = catalog::PROVIDERS.iter().map(|p| p.id).collect();
                return Err(SmartdoError::Config(format!(
                    "Unknown LLM provider '{}', expected one of {}",
                    provider,
                    known.join(", ")
                )));
            }
            if provider == "local" && llm.base_url.is_none() {
                warn!("Local provider configured without base_url, using the Ollama default");
            }
        }
    }

    if let Some(server) = &config.server {
        if server.port == Some(0) {
            return Err(SmartdoError::Config("server.port must be between 1 and 65535".into()));
        }
    }

    if let Some(storage) = &config.storage {
        if storage.path.as_deref().is_some_and(|p| p.trim().is_empty()) {
            return Err(SmartdoError::Config("storage.path must not be empty".into()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config_str(
            "llm:\n  provider: openai\n  model: gpt-4o\n  api_key: sk-test\n\
             storage:\n  path: /tmp/tasks.db\n  seed_samples: false\n\
             server:\n  host: 0.0.0.0\n  port: 9000\n\
             prompts:\n  dir: ./prompts\n",
        )
        .unwrap();
        assert_eq!(config.resolved_llm().model, "gpt-4o");
        assert_eq!(config.db_path(), "/tmp/tasks.db");
        assert!(!config.seed_samples());
        assert_eq!(config.host(), "0.0.0.0");
        assert_eq!(config.port(), 9000);
        assert_eq!(config.prompts_dir().as_deref(), Some("./prompts"));
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = parse_config_str("").unwrap();
        assert_eq!(config.port(), 8080);
    }

    #[test]
    fn test_unknown_provider_rejected() {
        let err = parse_config_str("llm:\n  provider: mystery\n").unwrap_err();
        assert!(matches!(err, SmartdoError::Config(_)));
        assert!(err.to_string().contains("mystery"));
    }

    #[test]
    fn test_port_zero_rejected() {
        assert!(parse_config_str("server:\n  port: 0\n").is_err());
    }

    #[test]
    fn test_local_without_base_url_allowed() {
        let config = parse_config_str("llm:\n  provider: local\n").unwrap();
        assert_eq!(config.resolved_llm().model, "qwen2.5:7b");
    }

    #[test]
    fn test_malformed_yaml_is_error() {
        assert!(matches!(
            parse_config_str("llm: [unclosed").unwrap_err(),
            SmartdoError::Yaml(_)
        ));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let err = parse_config(Path::new("/nonexistent/smartdo.yaml")).await.unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[tokio::test]
    async fn test_oversized_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.yaml");
        std::fs::write(&path, format!("# {}\n", "x".repeat(1_100_000))).unwrap();
        let err = parse_config(&path).await.unwrap_err();
        assert!(err.to_string().contains("1MB"));
    }
}
