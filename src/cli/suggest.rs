use crate::actions::{
    get_smart_reminder_suggestion, get_task_category_suggestion, CategorizeInput, ReminderInput,
    CATEGORY_FAILURE_MESSAGE, REMINDER_FAILURE_MESSAGE,
};
use crate::cli::commands::{GlobalArgs, RemindArgs, SuggestCategoryArgs};
use crate::cli::context;
use crate::errors::SmartdoError;
use crate::tasks::{load_user_habits, save_user_habits};

/// The boundary only hands back a message; recover the error kind so the
/// process exit code still tells validation and upstream failures apart.
fn outcome_error(message: String, upstream_message: &str) -> SmartdoError {
    if message == upstream_message {
        SmartdoError::Upstream(message)
    } else {
        SmartdoError::Validation(message)
    }
}

pub async fn handle_suggest_category(args: SuggestCategoryArgs, global: &GlobalArgs) -> Result<(), SmartdoError> {
    let (_, state) = context::open(global).await?;
    let input = CategorizeInput { title: Some(args.title), description: args.description };
    let suggestion = get_task_category_suggestion(&state.runner, input)
        .await
        .into_result()
        .map_err(|m| outcome_error(m, CATEGORY_FAILURE_MESSAGE))?;
    println!("{}", suggestion.category);
    Ok(())
}

pub async fn handle_remind(args: RemindArgs, global: &GlobalArgs) -> Result<(), SmartdoError> {
    let (_, state) = context::open(global).await?;
    let task = state
        .tasks
        .get_task(&args.id)?
        .ok_or_else(|| SmartdoError::NotFound(format!("Task {}", args.id)))?;

    let habits = match &args.habits {
        Some(h) => h.clone(),
        None => load_user_habits(state.settings.as_ref())?,
    };

    let input = ReminderInput {
        task_id: Some(task.id.clone()),
        task_title: Some(task.title.clone()),
        task_description: task.description.clone(),
        task_due_date: task.due_date.clone(),
        user_habits: Some(habits.clone()),
        task_urgency: Some(task.urgency.as_str().to_string()),
    };
    let suggestion = get_smart_reminder_suggestion(&state.runner, input)
        .await
        .into_result()
        .map_err(|m| outcome_error(m, REMINDER_FAILURE_MESSAGE))?;

    println!("Suggested reminder: {}", suggestion.reminder_date_time);
    println!("Reasoning: {}", suggestion.reasoning);

    if args.accept {
        state
            .tasks
            .set_reminder(&task.id, &suggestion.reminder_date_time, &suggestion.reasoning)?;
        if args.habits.is_some() {
            save_user_habits(state.settings.as_ref(), &habits)?;
        }
        println!("Reminder saved on {}", task.id);
    } else {
        println!("Run again with --accept to save it.");
    }
    Ok(())
}
