use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info};

use crate::flows::{CategorizationRequest, CategorizeTaskFlow, FlowRunner};
use crate::models::DEFAULT_CATEGORY;
use crate::utils::truncate_for_log;
use super::validation::Issues;
use super::ActionOutcome;

pub const CATEGORY_FAILURE_MESSAGE: &str = "Failed to get category suggestion from AI.";
const INPUT_CONTEXT: &str = "Invalid input for categorization";

/// Raw caller input; nothing is trusted to be present.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CategorizeInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl CategorizeInput {
    /// Read caller input from an untyped JSON body, reporting wrongly typed
    /// fields the same way as missing ones.
    pub fn from_json(body: &Value) -> Result<Self, String> {
        let mut issues = Issues::default();
        let Some(object) = body.as_object() else {
            issues.push("body", "Expected object");
            return Err(issues.into_message(INPUT_CONTEXT));
        };

        let input = Self {
            title: issues.optional_text(object, "title"),
            description: issues.optional_text(object, "description"),
        };
        if issues.is_empty() {
            Ok(input)
        } else {
            Err(issues.into_message(INPUT_CONTEXT))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySuggestion {
    pub category: String,
}

/// Pure check of caller input, independent of the flow's own contract.
pub fn validate_categorize_input(input: &CategorizeInput) -> Result<CategorizationRequest, String> {
    let mut issues = Issues::default();
    let title = issues.require_text("title", input.title.as_deref(), "Title is required");

    match title {
        Some(title) if issues.is_empty() => Ok(CategorizationRequest {
            title: title.to_string(),
            description: input.description.clone().unwrap_or_default(),
        }),
        _ => Err(issues.into_message(INPUT_CONTEXT)),
    }
}

/// Suggest a single category: the model's first suggestion, or `General`
/// when it suggests none.
pub async fn get_task_category_suggestion(
    runner: &FlowRunner,
    input: CategorizeInput,
) -> ActionOutcome<CategorySuggestion> {
    let request = match validate_categorize_input(&input) {
        Ok(request) => request,
        Err(message) => return ActionOutcome::failure(message),
    };

    match runner.run::<CategorizeTaskFlow>(&request).await {
        Ok(response) => {
            let category = response
                .categories
                .into_iter()
                .next()
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
            info!(category = %category, "Category suggested");
            ActionOutcome::Success(CategorySuggestion { category })
        }
        Err(e) if e.is_validation() => ActionOutcome::failure(e.to_string()),
        Err(e) => {
            error!(
                error_type = e.classify().error_type,
                error = %truncate_for_log(&e.to_string()),
                "Error getting category suggestion"
            );
            ActionOutcome::failure(CATEGORY_FAILURE_MESSAGE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: Option<&str>, description: Option<&str>) -> CategorizeInput {
        CategorizeInput {
            title: title.map(str::to_string),
            description: description.map(str::to_string),
        }
    }

    #[test]
    fn test_valid_input_defaults_description() {
        let req = validate_categorize_input(&input(Some("Buy milk"), None)).unwrap();
        assert_eq!(req.title, "Buy milk");
        assert_eq!(req.description, "");
    }

    #[test]
    fn test_empty_title() {
        let err = validate_categorize_input(&input(Some(""), Some("x"))).unwrap_err();
        assert_eq!(err, "Invalid input for categorization: title: Title is required");
    }

    #[test]
    fn test_missing_title() {
        let err = validate_categorize_input(&input(None, None)).unwrap_err();
        assert_eq!(err, "Invalid input for categorization: title: Required");
    }

    #[test]
    fn test_from_json_reports_wrong_type() {
        let err = CategorizeInput::from_json(&serde_json::json!({"title": 5})).unwrap_err();
        assert_eq!(err, "Invalid input for categorization: title: Expected string");
    }

    #[test]
    fn test_from_json_requires_object() {
        let err = CategorizeInput::from_json(&Value::Null).unwrap_err();
        assert_eq!(err, "Invalid input for categorization: body: Expected object");
    }

    #[test]
    fn test_from_json_then_validate() {
        let input = CategorizeInput::from_json(&serde_json::json!({"title": "Buy milk"})).unwrap();
        assert_eq!(validate_categorize_input(&input).unwrap().title, "Buy milk");
    }

    #[test]
    fn test_validation_is_deterministic() {
        let bad = input(Some("   "), None);
        assert_eq!(
            validate_categorize_input(&bad).unwrap_err(),
            validate_categorize_input(&bad).unwrap_err()
        );
    }
}
