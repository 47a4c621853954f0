use std::sync::LazyLock;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use crate::prompts::PromptTemplate;
use super::Flow;

/// Task text to categorize. `description` may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizationRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Suggested categories, most relevant first. Free text, not a closed set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizationResponse {
    pub categories: Vec<String>,
}

static PROMPT: LazyLock<PromptTemplate> = LazyLock::new(|| {
    PromptTemplate::new(
        "categorizeTaskPrompt",
        "You are a helpful assistant that suggests categories for tasks.

Given the following task title and description, suggest a few relevant categories.

Title: {{title}}
Description: {{description}}

Categories:",
    )
});

static INPUT_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "type": "object",
        "properties": {
            "title": { "type": "string", "minLength": 1, "description": "The title of the task." },
            "description": { "type": "string", "description": "A detailed description of the task." }
        },
        "required": ["title", "description"]
    })
});

static OUTPUT_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "type": "object",
        "properties": {
            "categories": {
                "type": "array",
                "items": { "type": "string" },
                "description": "An array of suggested categories for the task."
            }
        },
        "required": ["categories"]
    })
});

pub struct CategorizeTaskFlow;

impl Flow for CategorizeTaskFlow {
    type Input = CategorizationRequest;
    type Output = CategorizationResponse;

    const NAME: &'static str = "categorizeTaskFlow";

    fn prompt() -> &'static PromptTemplate { &PROMPT }
    fn input_schema() -> &'static Value { &INPUT_SCHEMA }
    fn output_schema() -> &'static Value { &OUTPUT_SCHEMA }
}
