use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use crate::api::AppState;
use crate::api::models::{SetReminderRequest, TaskListQuery};
use crate::errors::SmartdoError;
use crate::models::{NewTask, Task, TaskPatch};
use crate::tasks::save_user_habits;

pub async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<TaskListQuery>,
) -> Result<Json<Value>, SmartdoError> {
    let mut tasks = state.tasks.list_tasks()?;
    if let Some(category) = &query.category {
        tasks.retain(|t| &t.category == category);
    }
    Ok(Json(json!({ "tasks": tasks, "total": tasks.len() })))
}

pub async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<NewTask>,
) -> Result<(StatusCode, Json<Task>), SmartdoError> {
    let task = state.tasks.add_task(req)?;
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Task>, (StatusCode, Json<Value>)> {
    match state.tasks.get_task(&id) {
        Ok(Some(task)) => Ok(Json(task)),
        Ok(None) => Err((StatusCode::NOT_FOUND, Json(json!({"error": "Task not found"})))),
        Err(e) => Err((StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": e.to_string()})))),
    }
}

pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<TaskPatch>,
) -> Result<Json<Task>, SmartdoError> {
    state.tasks.edit_task(&id, patch).map(Json)
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match state.tasks.delete_task(&id) {
        Ok(true) => Ok(Json(json!({"deleted": true}))),
        Ok(false) => Err((StatusCode::NOT_FOUND, Json(json!({"error": "Task not found"})))),
        Err(e) => Err((StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": e.to_string()})))),
    }
}

pub async fn toggle_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Task>, SmartdoError> {
    state.tasks.toggle_completion(&id).map(Json)
}

pub async fn set_reminder(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<SetReminderRequest>,
) -> Result<Json<Task>, SmartdoError> {
    if req.user_habits.as_deref().is_some_and(|h| h.trim().is_empty()) {
        return Err(SmartdoError::Validation(
            "userHabits: User habits are required for smart reminders.".into(),
        ));
    }
    let task = state
        .tasks
        .set_reminder(&id, &req.reminder_date_time, &req.reasoning)?;
    if let Some(habits) = &req.user_habits {
        save_user_habits(state.settings.as_ref(), habits)?;
    }
    Ok(Json(task))
}

pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Value>, SmartdoError> {
    let categories = state.tasks.categories()?;
    Ok(Json(json!({ "categories": categories })))
}
