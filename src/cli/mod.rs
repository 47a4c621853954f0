pub mod commands;
pub mod context;
pub mod habits;
pub mod serve;
pub mod suggest;
pub mod tasks;

pub use commands::{Cli, Commands};
