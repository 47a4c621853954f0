use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use serde_json::Value;
use tracing::debug;

use crate::actions::{
    get_smart_reminder_suggestion, get_task_category_suggestion, ActionOutcome, CategorizeInput,
    CategorySuggestion, ReminderInput, ReminderSuggestion,
};
use crate::api::AppState;

fn status_of<T>(outcome: &ActionOutcome<T>) -> StatusCode {
    if outcome.is_success() {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    }
}

/// A body that is not JSON is treated like any non-object body, so the
/// caller still gets `{"error": ..}` from the boundary.
fn body_or_null(body: Result<Json<Value>, JsonRejection>) -> Value {
    match body {
        Ok(Json(value)) => value,
        Err(rejection) => {
            debug!("Rejected suggestion body: {}", rejection.body_text());
            Value::Null
        }
    }
}

pub async fn suggest_category(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> (StatusCode, Json<ActionOutcome<CategorySuggestion>>) {
    let outcome = match CategorizeInput::from_json(&body_or_null(body)) {
        Ok(input) => get_task_category_suggestion(&state.runner, input).await,
        Err(message) => ActionOutcome::failure(message),
    };
    (status_of(&outcome), Json(outcome))
}

pub async fn suggest_reminder(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> (StatusCode, Json<ActionOutcome<ReminderSuggestion>>) {
    let outcome = match ReminderInput::from_json(&body_or_null(body)) {
        Ok(input) => get_smart_reminder_suggestion(&state.runner, input).await,
        Err(message) => ActionOutcome::failure(message),
    };
    (status_of(&outcome), Json(outcome))
}
