use axum::{body::Bytes, response::IntoResponse, Json};
use serde_json::Value as JsonValue;

use crate::dto::message_dto::{is_empty_payload, EchoResponse};
use crate::error::{Error, Result};

#[axum::debug_handler]
pub async fn echo(body: Bytes) -> Result<impl IntoResponse> {
    let data = serde_json::from_slice::<JsonValue>(&body)
        .ok()
        .filter(|value| !is_empty_payload(value))
        .ok_or_else(|| Error::BadRequest("No JSON data provided".to_string()))?;

    Ok(Json(EchoResponse::new(data)))
}
