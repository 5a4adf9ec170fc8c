//! Generation Orchestration — the one user-facing "generate" action.
//!
//! Flow: begin (clear + loading) → gateway.get_recommendations → synthesize_roadmap →
//!       store result → dispatch chat initialization (not awaited).
//!
//! Every run takes a ticket from `GenerationState`. Results are only applied
//! while their ticket is still the latest, so a slow earlier request can never
//! overwrite a newer one.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::{mpsc, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::advisor::gateway::{GatewayError, RecommendationGateway};
use crate::advisor::roadmap::synthesize_roadmap;
use crate::chat::service::{ChatService, ChatSession};
use crate::models::profile::StudentProfile;
use crate::models::recommendations::Recommendations;
use crate::models::roadmap::Roadmap;

// ────────────────────────────────────────────────────────────────────────────
// State
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Failed,
}

/// Identifies one generation run. Only the latest ticket may write results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationTicket(u64);

impl GenerationTicket {
    pub fn number(&self) -> u64 {
        self.0
    }
}

/// Visible result of the most recent generation. Serialized as-is to clients.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationState {
    pub status: GenerationStatus,
    /// Number of the latest generation started; 0 before the first one.
    pub generation: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Recommendations>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roadmap: Option<Roadmap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl GenerationState {
    /// Starts a new run: clears the previous result and error and enters `Loading`.
    pub fn begin(&mut self) -> GenerationTicket {
        self.generation += 1;
        self.status = GenerationStatus::Loading;
        self.recommendations = None;
        self.roadmap = None;
        self.error = None;
        self.updated_at = Some(Utc::now());
        GenerationTicket(self.generation)
    }

    pub fn is_current(&self, ticket: GenerationTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Stores a successful result. Returns false (and changes nothing) for a stale ticket.
    pub fn succeed(
        &mut self,
        ticket: GenerationTicket,
        recommendations: Recommendations,
        roadmap: Roadmap,
    ) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.status = GenerationStatus::Success;
        self.recommendations = Some(recommendations);
        self.roadmap = Some(roadmap);
        self.error = None;
        self.updated_at = Some(Utc::now());
        true
    }

    /// Records a failure message. Returns false (and changes nothing) for a stale ticket.
    pub fn fail(&mut self, ticket: GenerationTicket, message: String) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.status = GenerationStatus::Failed;
        self.recommendations = None;
        self.roadmap = None;
        self.error = Some(message);
        self.updated_at = Some(Utc::now());
        true
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Chat dispatch
// ────────────────────────────────────────────────────────────────────────────

/// Outcome of a background chat initialization, tagged with its generation.
#[derive(Debug)]
pub struct ChatInitEvent {
    pub generation: u64,
    pub outcome: Result<ChatSession, GatewayError>,
}

/// Starts chat sessions off the request path and reports back over a channel.
pub struct ChatDispatcher {
    service: Arc<dyn ChatService>,
    events: mpsc::UnboundedSender<ChatInitEvent>,
}

impl ChatDispatcher {
    pub fn new(service: Arc<dyn ChatService>, events: mpsc::UnboundedSender<ChatInitEvent>) -> Self {
        Self { service, events }
    }

    pub fn dispatch(&self, ticket: GenerationTicket, profile: StudentProfile) -> JoinHandle<()> {
        let service = Arc::clone(&self.service);
        let events = self.events.clone();
        tokio::spawn(async move {
            let outcome = service.start_chat(&profile).await;
            let event = ChatInitEvent {
                generation: ticket.number(),
                outcome,
            };
            if events.send(event).is_err() {
                debug!(
                    "Chat init for generation {} finished after its listener closed",
                    ticket.number()
                );
            }
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Orchestration
// ────────────────────────────────────────────────────────────────────────────

/// Runs one generation against `state` and returns the state as it stands afterwards.
///
/// `profile` is the snapshot taken when the user triggered generation; both the
/// gateway and the roadmap see exactly this value.
pub async fn run_generation(
    state: &RwLock<GenerationState>,
    gateway: &dyn RecommendationGateway,
    chat: &ChatDispatcher,
    profile: StudentProfile,
) -> GenerationState {
    let ticket = state.write().await.begin();
    info!("Generation {} started", ticket.number());

    match gateway.get_recommendations(&profile).await {
        Ok(recommendations) => {
            let roadmap = synthesize_roadmap(
                recommendations.required_skills.as_deref(),
                &profile.project_keywords,
                &recommendations.career_paths.primary.title,
            );
            info!(
                "Generation {}: roadmap '{}' with {} skills ({} gaps, coverage {:.2})",
                ticket.number(),
                roadmap.goal,
                roadmap.skills.len(),
                roadmap.gaps().count(),
                roadmap.coverage()
            );

            let applied = state.write().await.succeed(ticket, recommendations, roadmap);
            if applied {
                chat.dispatch(ticket, profile);
            } else {
                info!("Generation {} superseded; discarding its result", ticket.number());
            }
        }
        Err(e) => {
            warn!("Generation {} failed: {e}", ticket.number());
            let applied = state.write().await.fail(ticket, e.user_message());
            if !applied {
                info!("Generation {} superseded; discarding its error", ticket.number());
            }
        }
    }

    state.read().await.clone()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
