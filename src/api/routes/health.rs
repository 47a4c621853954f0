use axum::Json;
use serde_json::{json, Value};

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "smartdo",
        "version": env!("CARGO_PKG_VERSION"),
        "build": {
            "timestamp": option_env!("BUILD_TIMESTAMP").unwrap_or("unknown"),
            "git_hash": option_env!("GIT_HASH").unwrap_or("unknown"),
        },
    }))
}
