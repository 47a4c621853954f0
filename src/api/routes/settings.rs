use axum::{extract::State, Json};
use crate::api::models::HabitsBody;
use crate::api::AppState;
use crate::errors::SmartdoError;
use crate::tasks::{load_user_habits, save_user_habits};

pub async fn get_habits(
    State(state): State<AppState>,
) -> Result<Json<HabitsBody>, SmartdoError> {
    let user_habits = load_user_habits(state.settings.as_ref())?;
    Ok(Json(HabitsBody { user_habits }))
}

pub async fn update_habits(
    State(state): State<AppState>,
    Json(body): Json<HabitsBody>,
) -> Result<Json<HabitsBody>, SmartdoError> {
    save_user_habits(state.settings.as_ref(), &body.user_habits)?;
    Ok(Json(body))
}
