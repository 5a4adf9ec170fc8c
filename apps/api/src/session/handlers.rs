//! Axum route handlers for sign-in sessions.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::User;
use crate::session::extract::CurrentSession;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub session_id: Uuid,
    pub user: User,
}

/// POST /api/v1/session
pub async fn handle_sign_in(
    State(state): State<AppState>,
    Json(request): Json<SignInRequest>,
) -> Result<Json<SignInResponse>, AppError> {
    let email = request.email.trim();
    if email.is_empty() {
        return Err(AppError::Validation("email cannot be empty".to_string()));
    }

    let user = User {
        email: email.to_string(),
        name: request
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty()),
    };
    let (session_id, _) = state.sessions.open(user.clone()).await;
    info!("Session {session_id} opened");

    Ok(Json(SignInResponse { session_id, user }))
}

/// GET /api/v1/session
pub async fn handle_current_user(session: CurrentSession) -> Json<User> {
    Json(session.workspace.user.clone())
}

/// DELETE /api/v1/session
pub async fn handle_sign_out(
    State(state): State<AppState>,
    session: CurrentSession,
) -> StatusCode {
    state.sessions.close(session.id).await;
    info!("Session {} closed", session.id);
    StatusCode::NO_CONTENT
}
