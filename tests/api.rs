use axum::http::StatusCode;
use axum::body::Body;
use http_body_util::BodyExt;
use tower::ServiceExt;
use serde_json::{json, Value};
use smartdo::api::{build_router, AppState};
use smartdo::flows::FlowRunner;
use smartdo::llm::StubProvider;
use smartdo::prompts::PromptLoader;
use smartdo::tasks::{MemoryTaskStore, TaskService};
use std::sync::Arc;

fn create_test_state(stub: StubProvider) -> AppState {
    let store = Arc::new(MemoryTaskStore::new());
    AppState {
        tasks: TaskService::new(store.clone()),
        settings: store,
        runner: FlowRunner::new(Arc::new(stub), PromptLoader::builtin()),
    }
}

fn offline_state() -> AppState {
    create_test_state(StubProvider::empty())
}

fn app(state: &AppState) -> axum::Router {
    build_router(state.clone())
}

fn make_request(method: &str, uri: &str, body: Option<Value>) -> axum::http::Request<Body> {
    let builder = axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");

    match body {
        Some(b) => builder.body(Body::from(serde_json::to_string(&b).unwrap())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn response_json(response: axum::http::Response<Body>) -> Value {
    let (parts, body) = response.into_parts();
    let bytes = body.collect().await.unwrap().to_bytes();
    if bytes.is_empty() {
        panic!("Empty response body. Status: {}, Headers: {:?}", parts.status, parts.headers);
    }
    serde_json::from_slice(&bytes)
        .unwrap_or_else(|e| panic!("JSON parse error: {}. Body: {:?}", e, String::from_utf8_lossy(&bytes)))
}

async fn create_task(state: &AppState, body: Value) -> Value {
    let response = app(state).oneshot(make_request("POST", "/api/tasks", Some(body))).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    response_json(response).await
}

#[tokio::test]
async fn test_health_endpoint() {
    let state = offline_state();
    let req = make_request("GET", "/api/health", None);
    let response = app(&state).oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "smartdo");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_create_and_get_task() {
    let state = offline_state();
    let created = create_task(&state, json!({"title": "Buy milk"})).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["category"], "General");
    assert_eq!(created["urgency"], "medium");
    assert_eq!(created["completed"], false);

    let response = app(&state).oneshot(make_request("GET", &format!("/api/tasks/{}", id), None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["id"], id);
    assert_eq!(body["title"], "Buy milk");
}

#[tokio::test]
async fn test_create_task_without_title() {
    let state = offline_state();
    let response = app(&state)
        .oneshot(make_request("POST", "/api/tasks", Some(json!({"description": "no title"}))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response_json(response).await;
    assert_eq!(body["error"], "title: Title is required");
}

#[tokio::test]
async fn test_get_missing_task() {
    let state = offline_state();
    let response = app(&state).oneshot(make_request("GET", "/api/tasks/nope", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response_json(response).await["error"], "Task not found");
}

#[tokio::test]
async fn test_list_filter_and_categories() {
    let state = offline_state();
    create_task(&state, json!({"title": "Report", "category": "Work"})).await;
    create_task(&state, json!({"title": "Groceries", "category": "Personal"})).await;
    create_task(&state, json!({"title": "Slides", "category": "Work"})).await;

    let response = app(&state).oneshot(make_request("GET", "/api/tasks", None)).await.unwrap();
    let body = response_json(response).await;
    assert_eq!(body["total"], 3);
    assert_eq!(body["tasks"][0]["title"], "Report");

    let response = app(&state).oneshot(make_request("GET", "/api/tasks?category=Work", None)).await.unwrap();
    let body = response_json(response).await;
    let titles: Vec<&str> = body["tasks"].as_array().unwrap().iter().map(|t| t["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["Report", "Slides"]);

    let response = app(&state).oneshot(make_request("GET", "/api/categories", None)).await.unwrap();
    assert_eq!(response_json(response).await["categories"], json!(["Personal", "Work"]));
}

#[tokio::test]
async fn test_patch_toggle_and_delete() {
    let state = offline_state();
    let created = create_task(&state, json!({"title": "Draft", "urgency": "low"})).await;
    let id = created["id"].as_str().unwrap().to_string();

    let response = app(&state)
        .oneshot(make_request("PATCH", &format!("/api/tasks/{}", id), Some(json!({"urgency": "high"}))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await["urgency"], "high");

    let response = app(&state)
        .oneshot(make_request("POST", &format!("/api/tasks/{}/toggle", id), None))
        .await
        .unwrap();
    assert_eq!(response_json(response).await["completed"], true);

    let response = app(&state)
        .oneshot(make_request("DELETE", &format!("/api/tasks/{}", id), None))
        .await
        .unwrap();
    assert_eq!(response_json(response).await["deleted"], true);

    let response = app(&state)
        .oneshot(make_request("DELETE", &format!("/api/tasks/{}", id), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_toggle_missing_task() {
    let state = offline_state();
    let response = app(&state)
        .oneshot(make_request("POST", "/api/tasks/missing/toggle", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_category_suggestion_endpoint() {
    let state = create_test_state(StubProvider::returning(json!({"categories": ["Personal", "Shopping"]})));
    let response = app(&state)
        .oneshot(make_request(
            "POST",
            "/api/suggestions/category",
            Some(json!({"title": "Buy milk", "description": ""})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await, json!({"category": "Personal"}));
}

#[tokio::test]
async fn test_category_suggestion_invalid_input() {
    let state = offline_state();
    let response = app(&state)
        .oneshot(make_request("POST", "/api/suggestions/category", Some(json!({"title": ""}))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response_json(response).await,
        json!({"error": "Invalid input for categorization: title: Title is required"})
    );
}

#[tokio::test]
async fn test_category_suggestion_wrong_field_type() {
    let state = offline_state();
    let response = app(&state)
        .oneshot(make_request("POST", "/api/suggestions/category", Some(json!({"title": 5}))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response_json(response).await,
        json!({"error": "Invalid input for categorization: title: Expected string"})
    );
}

#[tokio::test]
async fn test_category_suggestion_non_json_body() {
    let state = offline_state();
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/suggestions/category")
        .header("content-type", "application/json")
        .body(Body::from("not json"))
        .unwrap();
    let response = app(&state).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response_json(response).await,
        json!({"error": "Invalid input for categorization: body: Expected object"})
    );
}

#[tokio::test]
async fn test_reminder_suggestion_wrong_field_type() {
    let state = offline_state();
    let response = app(&state)
        .oneshot(make_request(
            "POST",
            "/api/suggestions/reminder",
            Some(json!({
                "taskTitle": "Project Report",
                "taskDueDate": "2025-01-01T00:00:00.000Z",
                "userHabits": "Evenings",
                "taskUrgency": 3
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response_json(response).await,
        json!({"error": "Invalid input for smart reminder: taskUrgency: Expected string"})
    );
}

#[tokio::test]
async fn test_reminder_suggestion_missing_content_type() {
    let state = offline_state();
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/suggestions/reminder")
        .body(Body::from(r#"{"taskTitle": "t"}"#))
        .unwrap();
    let response = app(&state).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response_json(response).await,
        json!({"error": "Invalid input for smart reminder: body: Expected object"})
    );
}

#[tokio::test]
async fn test_reminder_suggestion_upstream_failure() {
    let state = create_test_state(StubProvider::failing("upstream exploded"));
    let response = app(&state)
        .oneshot(make_request(
            "POST",
            "/api/suggestions/reminder",
            Some(json!({
                "taskTitle": "Project Report",
                "taskDueDate": "2025-01-01T00:00:00.000Z",
                "userHabits": "Evenings",
                "taskUrgency": "high"
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response_json(response).await;
    assert_eq!(body, json!({"error": "Failed to get smart reminder suggestion from AI."}));
}

#[tokio::test]
async fn test_accept_reminder_flow() {
    let state = create_test_state(StubProvider::returning(json!({
        "reminderDateTime": "2024-12-31T19:00:00Z",
        "reasoning": "Evening before the deadline."
    })));
    let created = create_task(
        &state,
        json!({"title": "Project Report", "dueDate": "2025-01-01T00:00:00.000Z", "urgency": "high"}),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    let response = app(&state)
        .oneshot(make_request(
            "POST",
            "/api/suggestions/reminder",
            Some(json!({
                "taskId": id,
                "taskTitle": "Project Report",
                "taskDueDate": "2025-01-01T00:00:00.000Z",
                "userHabits": "Free after 7 PM",
                "taskUrgency": "high"
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let suggestion = response_json(response).await;

    let response = app(&state)
        .oneshot(make_request(
            "PUT",
            &format!("/api/tasks/{}/reminder", id),
            Some(json!({
                "reminderDateTime": suggestion["reminderDateTime"],
                "reasoning": suggestion["reasoning"],
                "userHabits": "Free after 7 PM"
            })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let task = response_json(response).await;
    assert_eq!(task["reminderDateTime"], "2024-12-31T19:00:00Z");
    assert_eq!(task["reminderReasoning"], "Evening before the deadline.");

    let response = app(&state).oneshot(make_request("GET", "/api/settings/habits", None)).await.unwrap();
    assert_eq!(response_json(response).await["userHabits"], "Free after 7 PM");
}

#[tokio::test]
async fn test_habits_default_and_update() {
    let state = offline_state();
    let response = app(&state).oneshot(make_request("GET", "/api/settings/habits", None)).await.unwrap();
    assert_eq!(
        response_json(response).await["userHabits"],
        "Usually free in the evenings after 7 PM and on weekend mornings."
    );

    let response = app(&state)
        .oneshot(make_request("PUT", "/api/settings/habits", Some(json!({"userHabits": "  "}))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = app(&state)
        .oneshot(make_request("PUT", "/api/settings/habits", Some(json!({"userHabits": "Mornings"}))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await["userHabits"], "Mornings");
}
