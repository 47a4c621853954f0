pub mod actions;
pub mod api;
pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod flows;
pub mod llm;
pub mod models;
pub mod prompts;
pub mod tasks;
pub mod utils;
