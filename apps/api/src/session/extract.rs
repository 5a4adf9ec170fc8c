use std::sync::Arc;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use uuid::Uuid;

use crate::errors::AppError;
use crate::session::workspace::Workspace;
use crate::session::SESSION_HEADER;
use crate::state::AppState;

/// Resolves the `x-session-id` header to a live workspace, or rejects with 401.
pub struct CurrentSession {
    pub id: Uuid,
    pub workspace: Arc<Workspace>,
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get(SESSION_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| Uuid::parse_str(v.trim()).ok())
            .ok_or(AppError::Unauthorized)?;

        let workspace = state.sessions.get(id).await.ok_or(AppError::Unauthorized)?;

        Ok(CurrentSession { id, workspace })
    }
}
