pub mod health;
pub mod settings;
pub mod suggestions;
pub mod tasks;
