use std::sync::LazyLock;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use crate::errors::SmartdoError;
use crate::llm::{CallConfig, HarmBlockThreshold, HarmCategory};
use crate::models::Urgency;
use crate::prompts::PromptTemplate;
use crate::utils::is_valid_iso_datetime;
use super::Flow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderRequest {
    pub task_title: String,
    #[serde(default)]
    pub task_description: String,
    /// ISO-8601 deadline.
    pub task_due_date: String,
    /// Free-form description of the user's schedule preferences.
    pub user_habits: String,
    pub task_urgency: Urgency,
}

/// The model's suggestion. Both fields are required; an answer missing
/// either is rejected, not partially accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderResponse {
    pub reminder_date_time: String,
    pub reasoning: String,
}

static PROMPT: LazyLock<PromptTemplate> = LazyLock::new(|| {
    PromptTemplate::new(
        "scheduleReminderPrompt",
        "You are an AI assistant that intelligently schedules reminders for tasks.

Given the following information about the task, the user's habits, and the task's urgency, determine the optimal time to send a reminder.
Consider the user's habits to suggest a time that is convenient and effective.
Take into account the urgency of the task to ensure it is completed on time.

Task Title: {{taskTitle}}
Task Description: {{taskDescription}}
Task Due Date: {{taskDueDate}}
User Habits: {{userHabits}}
Task Urgency: {{taskUrgency}}

Reason your suggestion step by step, then provide the suggested reminder date and time in ISO format and the reasoning behind it.",
    )
});

static INPUT_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "type": "object",
        "properties": {
            "taskTitle": { "type": "string", "minLength": 1, "description": "The title of the task." },
            "taskDescription": { "type": "string", "description": "A detailed description of the task." },
            "taskDueDate": { "type": "string", "minLength": 1, "description": "The due date of the task in ISO format." },
            "userHabits": { "type": "string", "minLength": 1, "description": "Description of user habits and daily schedule." },
            "taskUrgency": { "type": "string", "enum": ["low", "medium", "high"], "description": "The urgency level of the task." }
        },
        "required": ["taskTitle", "taskDescription", "taskDueDate", "userHabits", "taskUrgency"]
    })
});

static OUTPUT_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "type": "object",
        "properties": {
            "reminderDateTime": {
                "type": "string",
                "description": "The suggested date and time for the reminder in ISO format."
            },
            "reasoning": {
                "type": "string",
                "description": "The reasoning behind the suggested reminder time."
            }
        },
        "required": ["reminderDateTime", "reasoning"]
    })
});

pub struct ScheduleReminderFlow;

impl Flow for ScheduleReminderFlow {
    type Input = ReminderRequest;
    type Output = ReminderResponse;

    const NAME: &'static str = "scheduleReminderFlow";

    fn prompt() -> &'static PromptTemplate { &PROMPT }
    fn input_schema() -> &'static Value { &INPUT_SCHEMA }
    fn output_schema() -> &'static Value { &OUTPUT_SCHEMA }

    fn call_config() -> CallConfig {
        CallConfig::default()
            .with_safety(HarmCategory::DangerousContent, HarmBlockThreshold::BlockOnlyHigh)
    }

    fn validate(input: &ReminderRequest) -> Result<(), SmartdoError> {
        if !is_valid_iso_datetime(&input.task_due_date) {
            return Err(SmartdoError::Validation(format!(
                "Invalid input for {}: taskDueDate: Invalid due date",
                Self::NAME
            )));
        }
        Ok(())
    }
}
