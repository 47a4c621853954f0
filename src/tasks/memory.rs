use std::sync::atomic::{AtomicU64, Ordering};
use dashmap::DashMap;
use crate::errors::SmartdoError;
use crate::models::Task;
use super::repository::{SettingsRepository, TaskRepository};

/// Process-local store. Nothing survives a restart.
#[derive(Default)]
pub struct MemoryTaskStore {
    tasks: DashMap<String, (u64, Task)>,
    settings: DashMap<String, String>,
    next_seq: AtomicU64,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TaskRepository for MemoryTaskStore {
    fn get(&self, id: &str) -> Result<Option<Task>, SmartdoError> {
        Ok(self.tasks.get(id).map(|entry| entry.value().1.clone()))
    }

    fn list(&self) -> Result<Vec<Task>, SmartdoError> {
        let mut entries: Vec<(u64, Task)> = self
            .tasks
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        entries.sort_by_key(|(seq, _)| *seq);
        Ok(entries.into_iter().map(|(_, task)| task).collect())
    }

    fn put(&self, task: &Task) -> Result<(), SmartdoError> {
        self.tasks
            .entry(task.id.clone())
            .and_modify(|entry| entry.1 = task.clone())
            .or_insert_with(|| (self.next_seq.fetch_add(1, Ordering::SeqCst), task.clone()));
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<bool, SmartdoError> {
        Ok(self.tasks.remove(id).is_some())
    }
}

impl SettingsRepository for MemoryTaskStore {
    fn get_setting(&self, key: &str) -> Result<Option<String>, SmartdoError> {
        Ok(self.settings.get(key).map(|v| v.value().clone()))
    }

    fn set_setting(&self, key: &str, value: &str) -> Result<(), SmartdoError> {
        self.settings.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
