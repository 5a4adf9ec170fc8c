//! Axum route handlers for the Profile API.

use axum::{extract::Multipart, Json};
use tracing::info;

use crate::errors::AppError;
use crate::models::profile::{ProfileUpdate, StudentProfile};
use crate::profile::resume::read_resume;
use crate::session::extract::CurrentSession;

/// GET /api/v1/profile
pub async fn handle_get_profile(session: CurrentSession) -> Json<StudentProfile> {
    Json(session.workspace.profile.snapshot().await)
}

/// PUT /api/v1/profile
pub async fn handle_replace_profile(
    session: CurrentSession,
    Json(profile): Json<StudentProfile>,
) -> Json<StudentProfile> {
    Json(session.workspace.profile.replace(profile).await)
}

/// PATCH /api/v1/profile
pub async fn handle_update_profile(
    session: CurrentSession,
    Json(update): Json<ProfileUpdate>,
) -> Json<StudentProfile> {
    Json(session.workspace.profile.update(update).await)
}

/// POST /api/v1/profile/resume
///
/// Multipart upload with a single `file` field (PDF or plain text).
/// The extracted text replaces the profile's resume text.
pub async fn handle_upload_resume(
    session: CurrentSession,
    mut multipart: Multipart,
) -> Result<Json<StudentProfile>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let content_type = field.content_type().map(str::to_string);
        let file_name = field.file_name().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        let size = data.len();

        let text = read_resume(content_type, file_name, data).await?;
        info!(
            "Session {}: resume uploaded ({} bytes, {} chars extracted)",
            session.id,
            size,
            text.len()
        );

        let profile = session.workspace.profile.set_resume_text(text).await;
        return Ok(Json(profile));
    }

    Err(AppError::Validation(
        "multipart body must contain a 'file' field".to_string(),
    ))
}
