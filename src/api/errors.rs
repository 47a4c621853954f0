use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use crate::errors::SmartdoError;

impl IntoResponse for SmartdoError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            SmartdoError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            SmartdoError::NotFound(_) => StatusCode::NOT_FOUND,
            SmartdoError::Config(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}
