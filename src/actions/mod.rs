//! The boundary between untrusted caller input and the AI flows. Every
//! function here re-validates its input, isolates flow failures, and returns
//! a plain success-or-error value; nothing propagates.

pub mod categorize;
pub mod reminder;
pub mod validation;

use serde::{Deserialize, Serialize};

pub use categorize::{
    get_task_category_suggestion, validate_categorize_input, CategorizeInput, CategorySuggestion,
    CATEGORY_FAILURE_MESSAGE,
};
pub use reminder::{
    get_smart_reminder_suggestion, validate_reminder_input, ReminderInput, ReminderSuggestion,
    REMINDER_FAILURE_MESSAGE,
};

/// Either the value or an error message, never both. Serializes as the
/// value's own fields or as `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionOutcome<T> {
    Failure { error: String },
    Success(T),
}

impl<T> ActionOutcome<T> {
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure { error: message.into() }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failure { error } => Some(error),
            Self::Success(_) => None,
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure { error } => Err(error),
        }
    }
}
