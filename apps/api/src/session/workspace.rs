//! Workspace — everything one signed-in user owns: profile, generation result, chat.
//!
//! Handlers are the only writers. Chat sessions arrive asynchronously from
//! `ChatDispatcher` and are installed by a listener task owned by the workspace.

use std::sync::Arc;

use tokio::sync::{mpsc, Mutex, MutexGuard, RwLock};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::advisor::orchestrator::{ChatDispatcher, ChatInitEvent, GenerationState};
use crate::chat::service::{ChatService, ChatSession};
use crate::models::profile::StudentProfile;
use crate::models::user::User;
use crate::profile::store::ProfileStore;

#[derive(Debug)]
struct InstalledChat {
    generation: u64,
    session: ChatSession,
}

type ChatSlot = Arc<RwLock<Option<InstalledChat>>>;

pub struct Workspace {
    pub user: User,
    pub profile: ProfileStore,
    pub generation: RwLock<GenerationState>,
    chat: ChatSlot,
    chat_events: mpsc::UnboundedSender<ChatInitEvent>,
    chat_turn: Mutex<()>,
}

impl Workspace {
    /// Creates the workspace and spawns its chat listener. Needs a tokio runtime.
    pub fn new(user: User) -> Self {
        let chat: ChatSlot = Arc::new(RwLock::new(None));
        let (chat_events, rx) = mpsc::unbounded_channel();
        tokio::spawn(install_chat_sessions(Arc::clone(&chat), rx));

        Self {
            user,
            profile: ProfileStore::new(StudentProfile::default()),
            generation: RwLock::new(GenerationState::default()),
            chat,
            chat_events,
            chat_turn: Mutex::new(()),
        }
    }

    pub fn chat_dispatcher(&self, service: Arc<dyn ChatService>) -> ChatDispatcher {
        ChatDispatcher::new(service, self.chat_events.clone())
    }

    /// Held for a whole chat turn (read history, call the model, record the exchange)
    /// so each message is sent with every earlier exchange of the session.
    pub async fn begin_chat_turn(&self) -> MutexGuard<'_, ()> {
        self.chat_turn.lock().await
    }

    pub async fn chat_session(&self) -> Option<ChatSession> {
        self.chat.read().await.as_ref().map(|c| c.session.clone())
    }

    /// Appends an exchange to the current chat, provided it is still session `session_id`.
    /// Returns the updated session, or `None` if the chat was replaced meanwhile.
    pub async fn record_chat_exchange(
        &self,
        session_id: Uuid,
        user_text: &str,
        reply: &str,
    ) -> Option<ChatSession> {
        let mut slot = self.chat.write().await;
        let installed = slot.as_mut().filter(|c| c.session.id == session_id)?;
        installed.session.record_exchange(user_text, reply);
        Some(installed.session.clone())
    }
}

/// Installs chat sessions as they arrive. Older generations never replace newer ones.
/// Exits once the workspace (and with it the sender) is dropped.
async fn install_chat_sessions(slot: ChatSlot, mut events: mpsc::UnboundedReceiver<ChatInitEvent>) {
    while let Some(event) = events.recv().await {
        match event.outcome {
            Ok(session) => {
                let mut current = slot.write().await;
                let newer = current
                    .as_ref()
                    .map_or(true, |c| c.generation < event.generation);
                if newer {
                    info!(
                        "Chat session {} ready for generation {}",
                        session.id, event.generation
                    );
                    *current = Some(InstalledChat {
                        generation: event.generation,
                        session,
                    });
                } else {
                    debug!("Ignoring chat session from stale generation {}", event.generation);
                }
            }
            Err(e) => {
                warn!("Chat initialization for generation {} failed: {e}", event.generation);
            }
        }
    }
}
