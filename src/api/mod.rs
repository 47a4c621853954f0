pub mod routes;
pub mod models;
pub mod errors;
pub mod auth;

use std::sync::Arc;
use axum::routing::{get, post, put};
use axum::Router;
use tracing::info;
use crate::config::SmartdoConfig;
use crate::db::Database;
use crate::errors::SmartdoError;
use crate::flows::{self, FlowRunner};
use crate::llm::create_provider;
use crate::prompts::PromptLoader;
use crate::tasks::{SettingsRepository, TaskService};

#[derive(Clone)]
pub struct AppState {
    pub tasks: TaskService,
    pub settings: Arc<dyn SettingsRepository>,
    pub runner: FlowRunner,
}

/// Wire the store, provider, and prompt loader described by `config`.
pub fn create_app_state(config: &SmartdoConfig) -> Result<AppState, SmartdoError> {
    let db = Arc::new(Database::new(&config.db_path())?);
    let tasks = TaskService::new(db.clone());
    if config.seed_samples() {
        tasks.seed_samples()?;
    }

    let llm = config.resolved_llm();
    let provider = create_provider(
        &llm.provider,
        llm.api_key.as_deref(),
        Some(llm.model.as_str()),
        llm.base_url.as_deref(),
    )?;
    info!(provider = %llm.provider, model = %llm.model, "LLM provider ready");

    let prompts = PromptLoader::load(config.prompts_dir().map(Into::into), &flows::builtin_prompts())?;
    if let Some(dir) = prompts.prompts_dir() {
        info!(dir = %dir.display(), "Prompt overrides enabled");
    }
    Ok(AppState {
        tasks,
        settings: db,
        runner: FlowRunner::new(provider, prompts),
    })
}

pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/api/tasks", get(routes::tasks::list_tasks).post(routes::tasks::create_task))
        .route(
            "/api/tasks/{id}",
            get(routes::tasks::get_task)
                .patch(routes::tasks::update_task)
                .delete(routes::tasks::delete_task),
        )
        .route("/api/tasks/{id}/toggle", post(routes::tasks::toggle_task))
        .route("/api/tasks/{id}/reminder", put(routes::tasks::set_reminder))
        .route("/api/categories", get(routes::tasks::list_categories))
        .route("/api/suggestions/category", post(routes::suggestions::suggest_category))
        .route("/api/suggestions/reminder", post(routes::suggestions::suggest_reminder))
        .route(
            "/api/settings/habits",
            get(routes::settings::get_habits).put(routes::settings::update_habits),
        )
        .layer(axum::middleware::from_fn(auth::api_auth_middleware));

    Router::new()
        .route("/api/health", get(routes::health::health_check))
        .merge(protected)
        .with_state(state)
}
