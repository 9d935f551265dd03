use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    dto::message_dto::{
        CreateMessageRequest, CreateMessageResponse, MessageListResponse, SaveMessageRequest,
        SaveMessageResponse,
    },
    error::Result,
    utils::validation::ValidatedJson,
    AppState,
};

#[axum::debug_handler]
pub async fn list_messages(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let messages = state.message_service.list_messages().await?;
    Ok(Json(MessageListResponse { messages }))
}

#[axum::debug_handler]
pub async fn create_message(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateMessageRequest>,
) -> Result<impl IntoResponse> {
    let text = payload.text.unwrap_or_default();
    let id = state.message_service.insert_message(&text).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateMessageResponse {
            message: "Message added successfully",
            id,
        }),
    ))
}

/// Older alias of [`create_message`]: reads `message` instead of `text` and
/// echoes the saved text back with 200.
#[axum::debug_handler]
pub async fn save_message(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SaveMessageRequest>,
) -> Result<impl IntoResponse> {
    let message = payload.message.unwrap_or_default();
    state.message_service.insert_message(&message).await?;

    Ok(Json(SaveMessageResponse {
        message,
        status: "saved",
    }))
}
