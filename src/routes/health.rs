use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::AppState;

#[axum::debug_handler]
pub async fn index() -> impl IntoResponse {
    let body = json!({
        "message": "Hello, Serverless!",
        "status": "success",
    });
    (StatusCode::OK, Json(body))
}

/// Always 200; `database` says whether a connection could be opened.
#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let database = if state.message_service.ping().await {
        "connected"
    } else {
        "disconnected"
    };
    let body = json!({
        "status": "OK",
        "database": database,
    });
    (StatusCode::OK, Json(body))
}
