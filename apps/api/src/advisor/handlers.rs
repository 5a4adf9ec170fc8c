//! Axum route handlers for the Advisor API.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::advisor::orchestrator::{run_generation, GenerationState};
use crate::advisor::roadmap::synthesize_roadmap;
use crate::models::roadmap::Roadmap;
use crate::session::extract::CurrentSession;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizeRequest {
    #[serde(default)]
    pub required_skills: Option<Vec<String>>,
    #[serde(default)]
    pub project_keywords: String,
    pub goal: String,
}

/// POST /api/v1/advisor/generate
///
/// Snapshot profile → gateway → roadmap → chat init (background).
/// A gateway failure is reported in the returned state (`status: "failed"`), not as an HTTP error.
pub async fn handle_generate(
    State(state): State<AppState>,
    session: CurrentSession,
) -> Json<GenerationState> {
    let workspace = &session.workspace;
    let snapshot = workspace.profile.snapshot().await;
    let dispatcher = workspace.chat_dispatcher(Arc::clone(&state.chat));

    let result = run_generation(
        &workspace.generation,
        state.gateway.as_ref(),
        &dispatcher,
        snapshot,
    )
    .await;

    Json(result)
}

/// GET /api/v1/advisor
pub async fn handle_get_advice(session: CurrentSession) -> Json<GenerationState> {
    Json(session.workspace.generation.read().await.clone())
}

/// POST /api/v1/roadmap/synthesize
///
/// Stateless access to roadmap synthesis.
pub async fn handle_synthesize(Json(request): Json<SynthesizeRequest>) -> Json<Roadmap> {
    Json(synthesize_roadmap(
        request.required_skills.as_deref(),
        &request.project_keywords,
        &request.goal,
    ))
}
