use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use chrono::{Duration, Utc};
use tracing::{debug, info};

use crate::errors::SmartdoError;
use crate::models::{NewTask, Task, TaskPatch, Urgency, DEFAULT_CATEGORY};
use crate::utils::is_valid_iso_datetime;
use super::repository::TaskRepository;

/// Task operations over any repository backend.
#[derive(Clone)]
pub struct TaskService {
    repo: Arc<dyn TaskRepository>,
}

fn check_title(title: &str) -> Result<(), SmartdoError> {
    if title.trim().is_empty() {
        return Err(SmartdoError::Validation("title: Title is required".into()));
    }
    Ok(())
}

fn check_due_date(due_date: Option<&str>) -> Result<(), SmartdoError> {
    match due_date {
        Some(d) if !is_valid_iso_datetime(d) => {
            Err(SmartdoError::Validation("dueDate: Invalid due date".into()))
        }
        _ => Ok(()),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl TaskService {
    pub fn new(repo: Arc<dyn TaskRepository>) -> Self {
        Self { repo }
    }

    pub fn add_task(&self, new: NewTask) -> Result<Task, SmartdoError> {
        check_title(&new.title)?;
        check_due_date(new.due_date.as_deref())?;

        let task = Task {
            id: uuid::Uuid::new_v4().to_string(),
            title: new.title,
            description: non_blank(new.description),
            due_date: non_blank(new.due_date),
            category: non_blank(new.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            completed: false,
            urgency: new.urgency.unwrap_or_default(),
            reminder_date_time: non_blank(new.reminder_date_time),
            reminder_reasoning: non_blank(new.reminder_reasoning),
        };
        self.repo.put(&task)?;
        info!(task_id = %task.id, category = %task.category, "Task added");
        Ok(task)
    }

    pub fn edit_task(&self, id: &str, patch: TaskPatch) -> Result<Task, SmartdoError> {
        if let Some(title) = &patch.title {
            check_title(title)?;
        }
        check_due_date(patch.due_date.as_deref())?;

        let mut task = self.require(id)?;
        task.apply(patch);
        self.repo.put(&task)?;
        debug!(task_id = %id, "Task edited");
        Ok(task)
    }

    pub fn delete_task(&self, id: &str) -> Result<bool, SmartdoError> {
        let deleted = self.repo.delete(id)?;
        if deleted {
            info!(task_id = %id, "Task deleted");
        }
        Ok(deleted)
    }

    pub fn toggle_completion(&self, id: &str) -> Result<Task, SmartdoError> {
        let mut task = self.require(id)?;
        task.completed = !task.completed;
        self.repo.put(&task)?;
        debug!(task_id = %id, completed = task.completed, "Task completion toggled");
        Ok(task)
    }

    /// Persist an accepted reminder suggestion exactly as given.
    pub fn set_reminder(&self, id: &str, reminder_date_time: &str, reasoning: &str) -> Result<Task, SmartdoError> {
        if reminder_date_time.trim().is_empty() {
            return Err(SmartdoError::Validation("reminderDateTime: Required".into()));
        }
        let mut task = self.require(id)?;
        task.reminder_date_time = Some(reminder_date_time.to_string());
        task.reminder_reasoning = Some(reasoning.to_string());
        self.repo.put(&task)?;
        info!(task_id = %id, reminder = %reminder_date_time, "Reminder set");
        Ok(task)
    }

    pub fn get_task(&self, id: &str) -> Result<Option<Task>, SmartdoError> {
        self.repo.get(id)
    }

    pub fn list_tasks(&self) -> Result<Vec<Task>, SmartdoError> {
        self.repo.list()
    }

    /// Distinct categories in use, sorted.
    pub fn categories(&self) -> Result<Vec<String>, SmartdoError> {
        let set: BTreeSet<String> = self.repo.list()?.into_iter().map(|t| t.category).collect();
        Ok(set.into_iter().collect())
    }

    /// Tasks grouped by category, categories sorted, tasks in insertion order.
    pub fn tasks_by_category(&self) -> Result<BTreeMap<String, Vec<Task>>, SmartdoError> {
        let mut groups: BTreeMap<String, Vec<Task>> = BTreeMap::new();
        for task in self.repo.list()? {
            groups.entry(task.category.clone()).or_default().push(task);
        }
        Ok(groups)
    }

    /// Add the starter tasks when the store is empty. Returns how many were added.
    pub fn seed_samples(&self) -> Result<usize, SmartdoError> {
        if !self.repo.list()?.is_empty() {
            return Ok(0);
        }

        let now = Utc::now();
        let samples = [
            NewTask {
                title: "Grocery Shopping".to_string(),
                description: Some("Buy milk, eggs, bread, and cheese.".to_string()),
                due_date: Some((now + Duration::days(2)).to_rfc3339()),
                category: Some("Personal".to_string()),
                urgency: Some(Urgency::Medium),
                ..Default::default()
            },
            NewTask {
                title: "Project Report".to_string(),
                description: Some("Finalize Q3 project report for client.".to_string()),
                due_date: Some((now + Duration::days(5)).to_rfc3339()),
                category: Some("Work".to_string()),
                urgency: Some(Urgency::High),
                ..Default::default()
            },
            NewTask {
                title: "Book Doctor Appointment".to_string(),
                description: Some("Annual check-up.".to_string()),
                category: Some("Personal".to_string()),
                urgency: Some(Urgency::Low),
                ..Default::default()
            },
        ];

        let count = samples.len();
        let mut added = Vec::with_capacity(count);
        for sample in samples {
            added.push(self.add_task(sample)?);
        }
        if let Some(last) = added.last() {
            self.toggle_completion(&last.id)?;
        }
        info!(count, "Seeded sample tasks");
        Ok(count)
    }

    fn require(&self, id: &str) -> Result<Task, SmartdoError> {
        self.repo
            .get(id)?
            .ok_or_else(|| SmartdoError::NotFound(format!("Task {}", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::MemoryTaskStore;

    fn service() -> TaskService {
        TaskService::new(Arc::new(MemoryTaskStore::new()))
    }

    fn new_task(title: &str) -> NewTask {
        NewTask { title: title.to_string(), ..Default::default() }
    }

    #[test]
    fn test_add_applies_defaults() {
        let svc = service();
        let task = svc.add_task(new_task("Buy milk")).unwrap();
        assert_eq!(task.category, "General");
        assert_eq!(task.urgency, Urgency::Medium);
        assert!(!task.completed);
        assert!(uuid::Uuid::parse_str(&task.id).is_ok());
    }

    #[test]
    fn test_add_rejects_blank_title() {
        let err = service().add_task(new_task(" ")).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_add_rejects_bad_due_date() {
        let mut new = new_task("Pay rent");
        new.due_date = Some("tomorrow-ish".to_string());
        let err = service().add_task(new).unwrap_err();
        assert_eq!(err.to_string(), "dueDate: Invalid due date");
    }

    #[test]
    fn test_edit_partial() {
        let svc = service();
        let task = svc.add_task(new_task("Draft")).unwrap();
        let edited = svc
            .edit_task(&task.id, TaskPatch { category: Some("Work".to_string()), ..Default::default() })
            .unwrap();
        assert_eq!(edited.category, "Work");
        assert_eq!(edited.title, "Draft");
        assert_eq!(svc.get_task(&task.id).unwrap().unwrap().category, "Work");
    }

    #[test]
    fn test_edit_missing_task() {
        let err = service().edit_task("nope", TaskPatch::default()).unwrap_err();
        assert!(matches!(err, SmartdoError::NotFound(_)));
    }

    #[test]
    fn test_toggle_twice() {
        let svc = service();
        let task = svc.add_task(new_task("Walk dog")).unwrap();
        assert!(svc.toggle_completion(&task.id).unwrap().completed);
        assert!(!svc.toggle_completion(&task.id).unwrap().completed);
    }

    #[test]
    fn test_set_reminder_stores_values_verbatim() {
        let svc = service();
        let task = svc.add_task(new_task("Report")).unwrap();
        let updated = svc
            .set_reminder(&task.id, "2024-12-31T19:00:00Z", "Evening before.")
            .unwrap();
        assert_eq!(updated.reminder_date_time.as_deref(), Some("2024-12-31T19:00:00Z"));
        assert_eq!(updated.reminder_reasoning.as_deref(), Some("Evening before."));
    }

    #[test]
    fn test_categories_sorted_and_distinct() {
        let svc = service();
        for (title, category) in [("a", "Work"), ("b", "Personal"), ("c", "Work")] {
            let mut new = new_task(title);
            new.category = Some(category.to_string());
            svc.add_task(new).unwrap();
        }
        assert_eq!(svc.categories().unwrap(), vec!["Personal", "Work"]);
        let groups = svc.tasks_by_category().unwrap();
        assert_eq!(groups["Work"].len(), 2);
        assert_eq!(groups["Work"][0].title, "a");
    }

    #[test]
    fn test_delete() {
        let svc = service();
        let task = svc.add_task(new_task("Temp")).unwrap();
        assert!(svc.delete_task(&task.id).unwrap());
        assert!(!svc.delete_task(&task.id).unwrap());
    }

    #[test]
    fn test_seed_only_when_empty() {
        let svc = service();
        assert_eq!(svc.seed_samples().unwrap(), 3);
        assert_eq!(svc.seed_samples().unwrap(), 0);
        let tasks = svc.list_tasks().unwrap();
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[1].title, "Project Report");
        assert!(tasks[2].completed);
    }
}
