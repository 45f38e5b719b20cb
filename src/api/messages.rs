use crate::api::AppState;
use crate::api::extractors::ValidJson;
use crate::api::schemas::messages::{CreateMessageRequest, MessageListResponse, MessageResponse};
use crate::error::Result;
use axum::{Json, extract::State};

/// Creates a message from a `{"content": ...}` body.
///
/// # Errors
/// Returns `AppError::Validation` if the body is not JSON matching the request schema.
/// Returns `AppError::Database` if the message cannot be stored.
pub async fn create_message(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateMessageRequest>,
) -> Result<Json<MessageResponse>> {
    let message = state.message_service.create_message(&request.content).await?;

    Ok(Json(message.into()))
}

/// Lists the most recent messages, newest first.
///
/// # Errors
/// Returns `AppError::Database` if the messages cannot be read.
pub async fn list_messages(State(state): State<AppState>) -> Result<Json<MessageListResponse>> {
    let messages = state.message_service.list_recent().await?;

    Ok(Json(messages.into()))
}
