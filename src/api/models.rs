use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct TaskListQuery {
    pub category: Option<String>,
}

/// An accepted reminder suggestion to persist on a task.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetReminderRequest {
    #[serde(default)]
    pub reminder_date_time: String,
    #[serde(default)]
    pub reasoning: String,
    /// Habits the suggestion was made with; saved when present.
    #[serde(default)]
    pub user_habits: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitsBody {
    #[serde(default)]
    pub user_habits: String,
}
