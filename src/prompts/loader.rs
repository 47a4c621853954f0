use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock};
use regex::Regex;
use crate::errors::SmartdoError;
use super::template::PromptTemplate;
use tracing::{debug, info};

static INCLUDE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@include\(([^)]+)\)").expect("include regex is valid")
});

const MAX_INCLUDE_DEPTH: u8 = 5;

/// Resolves the prompt used by a flow: the built-in template, or an override
/// file `<name>.txt` from the configured prompts directory. Overrides are read
/// once in [`PromptLoader::load`]; resolving never touches the filesystem.
#[derive(Debug, Clone, Default)]
pub struct PromptLoader {
    prompts_dir: Option<PathBuf>,
    overrides: Arc<HashMap<String, PromptTemplate>>,
}

impl PromptLoader {
    /// Read and check the overrides for `builtins` from `prompts_dir`.
    pub fn load(prompts_dir: Option<PathBuf>, builtins: &[&PromptTemplate]) -> Result<Self, SmartdoError> {
        let mut loader = Self { prompts_dir, overrides: Arc::default() };
        let Some(dir) = loader.prompts_dir.clone() else {
            return Ok(loader);
        };
        debug!(dir = %dir.display(), "Loading prompt overrides");

        let mut overrides = HashMap::new();
        for builtin in builtins {
            if let Some(template) = loader.read_override(&dir, builtin)? {
                overrides.insert(builtin.name.clone(), template);
            }
        }
        loader.overrides = Arc::new(overrides);
        Ok(loader)
    }

    /// Built-in templates only.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// The loaded override for `builtin`, or `builtin` itself.
    pub fn resolve<'a>(&'a self, builtin: &'a PromptTemplate) -> &'a PromptTemplate {
        self.overrides.get(&builtin.name).unwrap_or(builtin)
    }

    /// An override may only use placeholders the built-in declares.
    fn read_override(&self, dir: &Path, builtin: &PromptTemplate) -> Result<Option<PromptTemplate>, SmartdoError> {
        let file_path = dir.join(format!("{}.txt", builtin.name));
        if !file_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&file_path).map_err(|e| {
            SmartdoError::Prompt(format!("Failed to read prompt {}: {}", file_path.display(), e))
        })?;
        let text = self.process_includes(&content, 0)?;
        let candidate = PromptTemplate { name: builtin.name.clone(), text };

        let allowed = builtin.placeholders();
        let unknown: Vec<String> = candidate
            .placeholders()
            .into_iter()
            .filter(|p| !allowed.contains(p))
            .collect();
        if !unknown.is_empty() {
            return Err(SmartdoError::Prompt(format!(
                "Prompt override {} uses unknown variables: {}",
                file_path.display(),
                unknown.join(", ")
            )));
        }

        info!(prompt = %builtin.name, path = %file_path.display(), "Using prompt override");
        Ok(Some(candidate))
    }

    /// Process @include(path) directives recursively with depth limit.
    fn process_includes(&self, content: &str, depth: u8) -> Result<String, SmartdoError> {
        if depth >= MAX_INCLUDE_DEPTH {
            return Err(SmartdoError::Prompt(format!(
                "Include depth limit ({}) exceeded, possible circular include",
                MAX_INCLUDE_DEPTH
            )));
        }
        let Some(dir) = &self.prompts_dir else {
            return Ok(content.to_string());
        };

        let matches: Vec<(String, String)> = INCLUDE_RE
            .captures_iter(content)
            .map(|cap| (cap[0].to_string(), cap[1].to_string()))
            .collect();

        let mut result = content.to_string();
        for (full_match, include_path) in matches {
            let file_path = dir.join(&include_path);
            let included = std::fs::read_to_string(&file_path).map_err(|e| {
                SmartdoError::Prompt(format!(
                    "Failed to read included file {} (referenced as @include({})): {}",
                    file_path.display(),
                    include_path,
                    e
                ))
            })?;
            let processed = self.process_includes(&included, depth + 1)?;
            result = result.replace(&full_match, &processed);
        }

        Ok(result)
    }

    pub fn prompts_dir(&self) -> Option<&Path> {
        self.prompts_dir.as_deref()
    }
}
