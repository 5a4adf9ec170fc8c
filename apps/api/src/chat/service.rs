//! Chat Service — opens profile-primed chat sessions and exchanges messages.
//!
//! `AppState` holds an `Arc<dyn ChatService>`; the default is `GeminiChatService`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::advisor::gateway::GatewayError;
use crate::chat::prompts::CHAT_SYSTEM_TEMPLATE;
use crate::llm_client::prompts::profile_context;
use crate::llm_client::LlmClient;
use crate::models::chat::ChatMessage;
use crate::models::profile::StudentProfile;

/// One conversation. `messages` only ever grows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    #[serde(skip)]
    pub system_instruction: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new(system_instruction: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            system_instruction,
            messages: Vec::new(),
        }
    }

    /// Appends a completed user/model exchange.
    pub fn record_exchange(&mut self, user_text: &str, reply: &str) {
        self.messages.push(ChatMessage::user(user_text));
        self.messages.push(ChatMessage::model(reply));
    }
}

#[async_trait]
pub trait ChatService: Send + Sync {
    /// Opens a session primed with the profile.
    async fn start_chat(&self, profile: &StudentProfile) -> Result<ChatSession, GatewayError>;

    /// Sends `text` after the session's history and returns the reply.
    /// Does not modify the session.
    async fn send_message(&self, session: &ChatSession, text: &str)
        -> Result<String, GatewayError>;
}

pub struct GeminiChatService(pub LlmClient);

#[async_trait]
impl ChatService for GeminiChatService {
    async fn start_chat(&self, profile: &StudentProfile) -> Result<ChatSession, GatewayError> {
        Ok(ChatSession::new(chat_system_instruction(profile)))
    }

    async fn send_message(
        &self,
        session: &ChatSession,
        text: &str,
    ) -> Result<String, GatewayError> {
        let reply = self
            .0
            .chat(&session.messages, text, &session.system_instruction)
            .await?;
        Ok(reply)
    }
}

pub fn chat_system_instruction(profile: &StudentProfile) -> String {
    CHAT_SYSTEM_TEMPLATE.replace("{profile}", &profile_context(profile))
}
