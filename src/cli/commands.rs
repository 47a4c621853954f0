use clap::{Parser, Subcommand, Args};
use crate::models::Urgency;

#[derive(Parser)]
#[command(name = "smartdo", version, about = "Task tracker with AI category suggestions and smart reminders")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalArgs,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,
}

/// Options shared by every command that touches the store or the model.
#[derive(Args, Clone, Default)]
pub struct GlobalArgs {
    /// YAML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// SQLite database path (overrides storage.path)
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// LLM provider: gemini, openai, local, stub
    #[arg(long, global = true)]
    pub provider: Option<String>,

    /// LLM model identifier
    #[arg(long, global = true)]
    pub model: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve(ServeArgs),
    /// Add a task
    Add(AddArgs),
    /// List tasks grouped by category
    List(ListArgs),
    /// Toggle a task's completion
    Done(TaskIdArgs),
    /// Edit fields of a task
    Edit(EditArgs),
    /// Delete a task
    Delete(TaskIdArgs),
    /// Ask the model for a category
    SuggestCategory(SuggestCategoryArgs),
    /// Ask the model when to be reminded about a task
    Remind(RemindArgs),
    /// Show or set the saved user habits
    Habits(HabitsArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Listen port (overrides server.port)
    #[arg(long)]
    pub port: Option<u16>,

    /// Listen address (overrides server.host)
    #[arg(long)]
    pub host: Option<String>,
}

#[derive(Args, Clone)]
pub struct AddArgs {
    /// Task title
    pub title: String,

    #[arg(short, long)]
    pub description: Option<String>,

    /// Due date, ISO-8601
    #[arg(long)]
    pub due: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    /// low, medium or high
    #[arg(short, long)]
    pub urgency: Option<Urgency>,

    /// Fill the category from an AI suggestion when none is given
    #[arg(long)]
    pub suggest: bool,
}

#[derive(Args, Clone)]
pub struct ListArgs {
    /// Only show this category
    #[arg(long)]
    pub category: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct TaskIdArgs {
    pub id: String,
}

#[derive(Args, Clone)]
pub struct EditArgs {
    pub id: String,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(short, long)]
    pub description: Option<String>,

    #[arg(long)]
    pub due: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(short, long)]
    pub urgency: Option<Urgency>,
}

#[derive(Args, Clone)]
pub struct SuggestCategoryArgs {
    pub title: String,

    #[arg(short, long)]
    pub description: Option<String>,
}

#[derive(Args, Clone)]
pub struct RemindArgs {
    /// Task to schedule a reminder for
    pub id: String,

    /// Habits text for this request (defaults to the saved habits)
    #[arg(long)]
    pub habits: Option<String>,

    /// Store the suggestion on the task
    #[arg(long)]
    pub accept: bool,
}

#[derive(Args, Clone)]
pub struct HabitsArgs {
    /// New habits text; omit to show the current one
    #[arg(long)]
    pub set: Option<String>,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: String,
}
