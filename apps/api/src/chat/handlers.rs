//! Axum route handlers for the Chat API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::warn;

use crate::chat::service::ChatSession;
use crate::errors::AppError;
use crate::models::chat::ChatMessage;
use crate::session::extract::CurrentSession;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub text: String,
}

const CHAT_NOT_READY: &str = "Chat is not ready yet. Generate recommendations first.";

/// GET /api/v1/chat
pub async fn handle_get_chat(session: CurrentSession) -> Result<Json<ChatSession>, AppError> {
    session
        .workspace
        .chat_session()
        .await
        .map(Json)
        .ok_or_else(|| AppError::Conflict(CHAT_NOT_READY.to_string()))
}

/// POST /api/v1/chat/messages
///
/// Sends the message with the running history and returns the model's reply.
/// The exchange is only recorded once the reply arrives. Turns within one
/// session run one at a time.
pub async fn handle_send_message(
    State(state): State<AppState>,
    session: CurrentSession,
    Json(request): Json<SendMessageRequest>,
) -> Result<Json<ChatMessage>, AppError> {
    let text = request.text.trim();
    if text.is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let _turn = session.workspace.begin_chat_turn().await;
    let chat = session
        .workspace
        .chat_session()
        .await
        .ok_or_else(|| AppError::Conflict(CHAT_NOT_READY.to_string()))?;

    let reply = state
        .chat
        .send_message(&chat, text)
        .await
        .map_err(|e| AppError::Llm(e.user_message()))?;

    if session
        .workspace
        .record_chat_exchange(chat.id, text, &reply)
        .await
        .is_none()
    {
        warn!(
            "Session {}: chat {} was replaced before its reply was recorded",
            session.id, chat.id
        );
    }

    Ok(Json(ChatMessage::model(reply)))
}
