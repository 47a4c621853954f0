use std::str::FromStr;
use serde::{Deserialize, Serialize};

pub const DEFAULT_CATEGORY: &str = "General";

/// How pressing a task is. Steers reminder reasoning only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    #[default]
    Medium,
    High,
}

impl Urgency {
    pub const ALL: [Urgency; 3] = [Urgency::Low, Urgency::Medium, Urgency::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Urgency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Urgency::ALL
            .into_iter()
            .find(|u| u.as_str() == s)
            .ok_or_else(|| format!("Invalid urgency '{}', expected one of low, medium, high", s))
    }
}

/// A tracked task, as stored and as exchanged with callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// ISO-8601 date-time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub category: String,
    pub completed: bool,
    pub urgency: Urgency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_reasoning: Option<String>,
}

/// Fields a caller supplies when creating a task. Category and urgency fall
/// back to `General` and `medium`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub urgency: Option<Urgency>,
    #[serde(default)]
    pub reminder_date_time: Option<String>,
    #[serde(default)]
    pub reminder_reasoning: Option<String>,
}

/// Partial update. `None` leaves a field alone.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub category: Option<String>,
    pub completed: Option<bool>,
    pub urgency: Option<Urgency>,
    pub reminder_date_time: Option<String>,
    pub reminder_reasoning: Option<String>,
}

impl Task {
    pub fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title { self.title = title; }
        if let Some(description) = patch.description { self.description = Some(description); }
        if let Some(due_date) = patch.due_date { self.due_date = Some(due_date); }
        if let Some(category) = patch.category { self.category = category; }
        if let Some(completed) = patch.completed { self.completed = completed; }
        if let Some(urgency) = patch.urgency { self.urgency = urgency; }
        if let Some(dt) = patch.reminder_date_time { self.reminder_date_time = Some(dt); }
        if let Some(reasoning) = patch.reminder_reasoning { self.reminder_reasoning = Some(reasoning); }
    }
}
