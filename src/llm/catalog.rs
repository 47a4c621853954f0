pub struct ProviderInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub env_var: &'static str,
    pub models: &'static [ModelInfo],
    pub needs_api_key: bool,
}

pub struct ModelInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub recommended: bool,
}

pub static PROVIDERS: &[ProviderInfo] = &[
    ProviderInfo {
        id: "gemini",
        name: "Google Gemini",
        env_var: "GEMINI_API_KEY",
        models: &[
            ModelInfo { id: "gemini-2.5-flash", label: "Gemini 2.5 Flash", recommended: true },
            ModelInfo { id: "gemini-2.5-pro", label: "Gemini 2.5 Pro", recommended: false },
            ModelInfo { id: "gemini-2.0-flash", label: "Gemini 2.0 Flash", recommended: false },
        ],
        needs_api_key: true,
    },
    ProviderInfo {
        id: "openai",
        name: "OpenAI",
        env_var: "OPENAI_API_KEY",
        models: &[
            ModelInfo { id: "gpt-4o-mini", label: "GPT-4o Mini", recommended: true },
            ModelInfo { id: "gpt-4o", label: "GPT-4o", recommended: false },
        ],
        needs_api_key: true,
    },
    ProviderInfo {
        id: "local",
        name: "Local / Ollama",
        env_var: "",
        models: &[
            ModelInfo { id: "qwen2.5:7b", label: "Qwen 2.5 7B", recommended: true },
        ],
        needs_api_key: false,
    },
    ProviderInfo {
        id: "stub",
        name: "Offline stub",
        env_var: "",
        models: &[
            ModelInfo { id: "stub", label: "Always answers with no output", recommended: true },
        ],
        needs_api_key: false,
    },
];

pub fn get_provider(id: &str) -> Option<&'static ProviderInfo> {
    PROVIDERS.iter().find(|p| p.id == id)
}

pub fn get_default_model(provider_id: &str) -> &'static str {
    if let Some(provider) = get_provider(provider_id) {
        provider.models.iter()
            .find(|m| m.recommended)
            .map(|m| m.id)
            .unwrap_or(provider.models[0].id)
    } else {
        "gemini-2.5-flash"
    }
}

/// Resolve the API key for a provider from its catalog environment variable.
pub fn api_key_from_env(provider_id: &str) -> Option<String> {
    let provider = get_provider(provider_id)?;
    if provider.env_var.is_empty() {
        return None;
    }
    std::env::var(provider.env_var).ok().filter(|k| !k.is_empty())
}
