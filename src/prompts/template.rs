use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;
use regex::Regex;
use serde_json::Value;
use crate::errors::SmartdoError;

/// Variables available for `{{name}}` interpolation, keyed by placeholder name.
pub type PromptVariables = BTreeMap<String, String>;

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("placeholder regex is valid")
});

/// A named prompt with `{{name}}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    pub name: String,
    pub text: String,
}

impl PromptTemplate {
    pub fn new(name: &str, text: &str) -> Self {
        Self { name: name.to_string(), text: text.to_string() }
    }

    /// Distinct placeholder names used by the template.
    pub fn placeholders(&self) -> BTreeSet<String> {
        PLACEHOLDER_RE
            .captures_iter(&self.text)
            .map(|cap| cap[1].to_string())
            .collect()
    }

    /// Substitute every placeholder in a single pass. Values are inserted
    /// verbatim and never re-scanned, so user text containing `{{x}}` stays as is.
    pub fn render(&self, vars: &PromptVariables) -> Result<String, SmartdoError> {
        let missing: Vec<String> = self
            .placeholders()
            .into_iter()
            .filter(|name| !vars.contains_key(name))
            .collect();
        if !missing.is_empty() {
            return Err(SmartdoError::Prompt(format!(
                "Template '{}' is missing variables: {}",
                self.name,
                missing.join(", ")
            )));
        }

        let rendered = PLACEHOLDER_RE.replace_all(&self.text, |cap: &regex::Captures| {
            vars.get(&cap[1]).cloned().unwrap_or_default()
        });
        Ok(rendered.into_owned())
    }
}

/// Flatten a serialized input contract into template variables. Strings are
/// used as-is, other scalars by their JSON text.
pub fn variables_from_value(value: &Value) -> Result<PromptVariables, SmartdoError> {
    let obj = value.as_object().ok_or_else(|| {
        SmartdoError::Prompt("Prompt input must serialize to a JSON object".into())
    })?;

    Ok(obj
        .iter()
        .map(|(key, v)| {
            let text = match v {
                Value::String(s) => s.clone(),
                Value::Null => String::new(),
                other => other.to_string(),
            };
            (key.clone(), text)
        })
        .collect())
}
