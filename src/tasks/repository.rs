use crate::errors::SmartdoError;
use crate::models::Task;

/// Tasks keyed by id. `list` returns tasks in insertion order; `put`
/// replaces an existing task in place.
pub trait TaskRepository: Send + Sync {
    fn get(&self, id: &str) -> Result<Option<Task>, SmartdoError>;
    fn list(&self) -> Result<Vec<Task>, SmartdoError>;
    fn put(&self, task: &Task) -> Result<(), SmartdoError>;
    fn delete(&self, id: &str) -> Result<bool, SmartdoError>;
}

/// Small string key/value store for user preferences.
pub trait SettingsRepository: Send + Sync {
    fn get_setting(&self, key: &str) -> Result<Option<String>, SmartdoError>;
    fn set_setting(&self, key: &str, value: &str) -> Result<(), SmartdoError>;
}
