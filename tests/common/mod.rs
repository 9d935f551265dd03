#![allow(dead_code)]

use std::env;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use messages_service::{build_router, config::Config, database::ensure_schema, AppState};
use serde_json::Value as JsonValue;
use sqlx::postgres::PgSslMode;
use tower::ServiceExt;

/// Router with no database configured.
pub fn offline_app() -> Router {
    build_router(AppState::new(Config::default()))
}

/// Router against `TEST_DATABASE_URL`, or `None` when it is not set.
pub async fn database_app() -> Option<Router> {
    dotenvy::dotenv().ok();
    let database_url = env::var("TEST_DATABASE_URL").ok()?;
    let config = Config {
        database_url: Some(database_url),
        database_ssl_mode: PgSslMode::Prefer,
        ..Config::default()
    };
    let state = AppState::new(config);
    ensure_schema(&state.connections).await;
    Some(build_router(state))
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, JsonValue) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let req = builder.body(body).unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let json = if bytes.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub fn unique_text(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{}-{}", prefix, nanos)
}

pub async fn post_json(app: &Router, uri: &str, payload: &JsonValue) -> (StatusCode, JsonValue) {
    let body = payload.to_string();
    send(app, "POST", uri, Some(body.as_str())).await
}
