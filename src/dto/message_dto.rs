use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use validator::Validate;

use crate::models::message::{Message, MessageId};
use crate::utils::literal::display_text;

/// Body of `POST /messages`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMessageRequest {
    #[validate(
        required(message = "Text is required"),
        length(min = 1, message = "Text is required")
    )]
    pub text: Option<String>,
}

/// Body of `POST /save`. Same insert as [`CreateMessageRequest`], different
/// field name.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SaveMessageRequest {
    #[validate(
        required(message = "Message is required"),
        length(min = 1, message = "Message is required")
    )]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageListResponse {
    pub messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
pub struct CreateMessageResponse {
    pub message: &'static str,
    pub id: MessageId,
}

#[derive(Debug, Serialize)]
pub struct SaveMessageResponse {
    pub message: String,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct EchoResponse {
    pub received_data: JsonValue,
    pub data_length: usize,
    pub status: &'static str,
}

impl EchoResponse {
    pub fn new(received_data: JsonValue) -> Self {
        let data_length = display_text(&received_data).chars().count();
        Self {
            received_data,
            data_length,
            status: "processed",
        }
    }
}

/// JSON values that count as "no data": `null`, `false`, zero, and empty
/// strings, arrays or objects.
pub fn is_empty_payload(value: &JsonValue) -> bool {
    match value {
        JsonValue::Null => true,
        JsonValue::Bool(b) => !b,
        JsonValue::Number(n) => n.as_f64() == Some(0.0),
        JsonValue::String(s) => s.is_empty(),
        JsonValue::Array(items) => items.is_empty(),
        JsonValue::Object(fields) => fields.is_empty(),
    }
}
