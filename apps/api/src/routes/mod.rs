pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::advisor::handlers as advisor;
use crate::chat::handlers as chat;
use crate::profile::handlers as profile;
use crate::session::handlers as session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let resume_limit = state.config.max_resume_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Session API
        .route(
            "/api/v1/session",
            post(session::handle_sign_in)
                .get(session::handle_current_user)
                .delete(session::handle_sign_out),
        )
        // Profile API
        .route(
            "/api/v1/profile",
            get(profile::handle_get_profile)
                .put(profile::handle_replace_profile)
                .patch(profile::handle_update_profile),
        )
        .route(
            "/api/v1/profile/resume",
            post(profile::handle_upload_resume).layer(DefaultBodyLimit::max(resume_limit)),
        )
        // Advisor API
        .route("/api/v1/advisor", get(advisor::handle_get_advice))
        .route("/api/v1/advisor/generate", post(advisor::handle_generate))
        .route("/api/v1/roadmap/synthesize", post(advisor::handle_synthesize))
        // Chat API
        .route("/api/v1/chat", get(chat::handle_get_chat))
        .route("/api/v1/chat/messages", post(chat::handle_send_message))
        .with_state(state)
}
