//! Task storage behind a repository interface, and the task operations
//! callers use on top of it.

pub mod habits;
pub mod memory;
pub mod repository;
pub mod service;

pub use crate::models::{NewTask, Task, TaskPatch, Urgency};
pub use habits::{load_user_habits, save_user_habits, DEFAULT_USER_HABITS};
pub use memory::MemoryTaskStore;
pub use repository::{SettingsRepository, TaskRepository};
pub use service::TaskService;
