use crate::errors::SmartdoError;
use super::repository::SettingsRepository;

pub const USER_HABITS_KEY: &str = "user_habits";
pub const DEFAULT_USER_HABITS: &str =
    "Usually free in the evenings after 7 PM and on weekend mornings.";

/// The saved habits text, or the default when none was saved yet.
pub fn load_user_habits(settings: &dyn SettingsRepository) -> Result<String, SmartdoError> {
    Ok(settings
        .get_setting(USER_HABITS_KEY)?
        .filter(|h| !h.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_USER_HABITS.to_string()))
}

pub fn save_user_habits(settings: &dyn SettingsRepository, habits: &str) -> Result<(), SmartdoError> {
    if habits.trim().is_empty() {
        return Err(SmartdoError::Validation(
            "userHabits: User habits are required for smart reminders.".into(),
        ));
    }
    settings.set_setting(USER_HABITS_KEY, habits)
}
