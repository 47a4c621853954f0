use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, info};

use crate::flows::{FlowRunner, ReminderRequest, ScheduleReminderFlow};
use crate::models::Urgency;
use crate::utils::{is_valid_iso_datetime, truncate_for_log};
use super::validation::Issues;
use super::ActionOutcome;

pub const REMINDER_FAILURE_MESSAGE: &str = "Failed to get smart reminder suggestion from AI.";
const INPUT_CONTEXT: &str = "Invalid input for smart reminder";

/// Raw caller input. `taskId` is context for logs only.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderInput {
    #[serde(default)]
    pub task_id: Option<String>,
    #[serde(default)]
    pub task_title: Option<String>,
    #[serde(default)]
    pub task_description: Option<String>,
    #[serde(default)]
    pub task_due_date: Option<String>,
    #[serde(default)]
    pub user_habits: Option<String>,
    #[serde(default)]
    pub task_urgency: Option<String>,
}

impl ReminderInput {
    /// Read caller input from an untyped JSON body, reporting every wrongly
    /// typed field.
    pub fn from_json(body: &Value) -> Result<Self, String> {
        let mut issues = Issues::default();
        let Some(object) = body.as_object() else {
            issues.push("body", "Expected object");
            return Err(issues.into_message(INPUT_CONTEXT));
        };

        let input = Self {
            task_id: issues.optional_text(object, "taskId"),
            task_title: issues.optional_text(object, "taskTitle"),
            task_description: issues.optional_text(object, "taskDescription"),
            task_due_date: issues.optional_text(object, "taskDueDate"),
            user_habits: issues.optional_text(object, "userHabits"),
            task_urgency: issues.optional_text(object, "taskUrgency"),
        };
        if issues.is_empty() {
            Ok(input)
        } else {
            Err(issues.into_message(INPUT_CONTEXT))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderSuggestion {
    pub reminder_date_time: String,
    pub reasoning: String,
}

pub fn validate_reminder_input(input: &ReminderInput) -> Result<ReminderRequest, String> {
    let mut issues = Issues::default();

    let title = issues.require_text("taskTitle", input.task_title.as_deref(), "Task title is required");

    let due_date = match input.task_due_date.as_deref() {
        None => {
            issues.push("taskDueDate", "Required");
            None
        }
        Some(d) if !is_valid_iso_datetime(d) => {
            issues.push("taskDueDate", "Invalid due date");
            None
        }
        Some(d) => Some(d),
    };

    let habits = issues.require_text(
        "userHabits",
        input.user_habits.as_deref(),
        "User habits are required for smart reminders.",
    );

    let urgency = match input.task_urgency.as_deref() {
        None => {
            issues.push("taskUrgency", "Required");
            None
        }
        Some(u) => match u.parse::<Urgency>() {
            Ok(urgency) => Some(urgency),
            Err(message) => {
                issues.push("taskUrgency", message);
                None
            }
        },
    };

    match (title, due_date, habits, urgency) {
        (Some(title), Some(due_date), Some(habits), Some(urgency)) if issues.is_empty() => {
            Ok(ReminderRequest {
                task_title: title.to_string(),
                task_description: input.task_description.clone().unwrap_or_default(),
                task_due_date: due_date.to_string(),
                user_habits: habits.to_string(),
                task_urgency: urgency,
            })
        }
        _ => Err(issues.into_message(INPUT_CONTEXT)),
    }
}

/// Ask for a reminder moment. The suggestion is returned exactly as the
/// model gave it; persisting it is the caller's decision.
pub async fn get_smart_reminder_suggestion(
    runner: &FlowRunner,
    input: ReminderInput,
) -> ActionOutcome<ReminderSuggestion> {
    let request = match validate_reminder_input(&input) {
        Ok(request) => request,
        Err(message) => return ActionOutcome::failure(message),
    };
    let task_id = input.task_id.as_deref().unwrap_or("-");

    match runner.run::<ScheduleReminderFlow>(&request).await {
        Ok(response) => {
            info!(task_id = %task_id, reminder = %response.reminder_date_time, "Reminder suggested");
            ActionOutcome::Success(ReminderSuggestion {
                reminder_date_time: response.reminder_date_time,
                reasoning: response.reasoning,
            })
        }
        Err(e) if e.is_validation() => ActionOutcome::failure(e.to_string()),
        Err(e) => {
            error!(
                task_id = %task_id,
                error_type = e.classify().error_type,
                error = %truncate_for_log(&e.to_string()),
                "Error getting smart reminder suggestion"
            );
            ActionOutcome::failure(REMINDER_FAILURE_MESSAGE)
        }
    }
}
