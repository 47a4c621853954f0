use tracing::{info, warn};
use crate::actions::{get_task_category_suggestion, CategorizeInput};
use crate::cli::commands::{AddArgs, EditArgs, GlobalArgs, ListArgs, TaskIdArgs};
use crate::cli::context;
use crate::errors::SmartdoError;
use crate::models::{NewTask, Task, TaskPatch};

pub(crate) fn format_task(task: &Task) -> String {
    let mark = if task.completed { "x" } else { " " };
    let mut line = format!("[{}] {}  ({}, {})", mark, task.title, task.urgency, task.id);
    if let Some(due) = &task.due_date {
        line.push_str(&format!("\n      due: {}", due));
    }
    if let Some(reminder) = &task.reminder_date_time {
        line.push_str(&format!("\n      reminder: {}", reminder));
    }
    line
}

pub async fn handle_add(args: AddArgs, global: &GlobalArgs) -> Result<(), SmartdoError> {
    let (_, state) = context::open(global).await?;

    let mut category = args.category;
    if category.is_none() && args.suggest {
        let input = CategorizeInput { title: Some(args.title.clone()), description: args.description.clone() };
        match get_task_category_suggestion(&state.runner, input).await.into_result() {
            Ok(suggestion) => {
                info!(category = %suggestion.category, "Using suggested category");
                category = Some(suggestion.category);
            }
            Err(message) => warn!(error = %message, "No category suggestion, using default"),
        }
    }

    let task = state.tasks.add_task(NewTask {
        title: args.title,
        description: args.description,
        due_date: args.due,
        category,
        urgency: args.urgency,
        ..Default::default()
    })?;
    println!("Added to {}:\n{}", task.category, format_task(&task));
    Ok(())
}

pub async fn handle_list(args: ListArgs, global: &GlobalArgs) -> Result<(), SmartdoError> {
    let (_, state) = context::open(global).await?;
    let mut groups = state.tasks.tasks_by_category()?;
    if let Some(category) = &args.category {
        groups.retain(|name, _| name == category);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    if groups.is_empty() {
        println!("No tasks.");
        return Ok(());
    }
    for (category, tasks) in &groups {
        println!("{} ({})", category, tasks.len());
        for task in tasks {
            println!("  {}", format_task(task));
        }
    }
    Ok(())
}

pub async fn handle_done(args: TaskIdArgs, global: &GlobalArgs) -> Result<(), SmartdoError> {
    let (_, state) = context::open(global).await?;
    let task = state.tasks.toggle_completion(&args.id)?;
    println!("{}", format_task(&task));
    Ok(())
}

pub async fn handle_edit(args: EditArgs, global: &GlobalArgs) -> Result<(), SmartdoError> {
    let (_, state) = context::open(global).await?;
    let patch = TaskPatch {
        title: args.title,
        description: args.description,
        due_date: args.due,
        category: args.category,
        urgency: args.urgency,
        ..Default::default()
    };
    let task = state.tasks.edit_task(&args.id, patch)?;
    println!("{}", format_task(&task));
    Ok(())
}

pub async fn handle_delete(args: TaskIdArgs, global: &GlobalArgs) -> Result<(), SmartdoError> {
    let (_, state) = context::open(global).await?;
    if !state.tasks.delete_task(&args.id)? {
        return Err(SmartdoError::NotFound(format!("Task {}", args.id)));
    }
    println!("Deleted {}", args.id);
    Ok(())
}
