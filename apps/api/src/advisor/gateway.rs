//! Recommendation Gateway — trait boundary around the external AI advisor.
//!
//! Default: `GeminiRecommendationGateway` (structured JSON call through `LlmClient`).
//! Tests substitute their own implementations.
//!
//! `AppState` holds an `Arc<dyn RecommendationGateway>`.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::advisor::prompts::{RECOMMENDATION_PROMPT_TEMPLATE, RECOMMENDATION_SYSTEM};
use crate::llm_client::prompts::{profile_context, JSON_ONLY_SYSTEM};
use crate::llm_client::{LlmClient, LlmError};
use crate::models::profile::StudentProfile;
use crate::models::recommendations::Recommendations;

/// Shown when a gateway failure carries no message of its own.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred.";

/// Any failure of an external AI collaborator (recommendations or chat).
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{0}")]
    Llm(LlmError),

    /// Reported by gateway implementations that fail with their own message.
    #[allow(dead_code)]
    #[error("{0}")]
    Failed(String),

    #[error("gateway failed without a message")]
    Silent,
}

impl From<LlmError> for GatewayError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::Api { ref message, .. } if message.trim().is_empty() => GatewayError::Silent,
            other => GatewayError::Llm(other),
        }
    }
}

impl GatewayError {
    /// The human-readable message carried by this failure, if any.
    pub fn message(&self) -> Option<String> {
        match self {
            GatewayError::Silent => None,
            GatewayError::Failed(msg) if msg.trim().is_empty() => None,
            other => Some(other.to_string()),
        }
    }

    /// The message to show the user: the carried message or the generic fallback.
    pub fn user_message(&self) -> String {
        self.message()
            .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string())
    }
}

/// Produces recommendations for a profile snapshot.
#[async_trait]
pub trait RecommendationGateway: Send + Sync {
    async fn get_recommendations(
        &self,
        profile: &StudentProfile,
    ) -> Result<Recommendations, GatewayError>;
}

/// Gemini-backed gateway. One JSON-mode call per generation.
pub struct GeminiRecommendationGateway(pub LlmClient);

#[async_trait]
impl RecommendationGateway for GeminiRecommendationGateway {
    async fn get_recommendations(
        &self,
        profile: &StudentProfile,
    ) -> Result<Recommendations, GatewayError> {
        let prompt = RECOMMENDATION_PROMPT_TEMPLATE.replace("{profile}", &profile_context(profile));
        let system = format!("{RECOMMENDATION_SYSTEM} {JSON_ONLY_SYSTEM}");

        info!("Requesting recommendations for role '{}'", profile.desired_role);
        let recommendations: Recommendations = self.0.call_json(&prompt, &system).await?;
        warn_on_untitled_primary(&recommendations);
        info!(
            "Recommendations received: readiness={}, courses={}, required_skills={}",
            recommendations.readiness.score,
            recommendations.courses.len(),
            recommendations.required_skills.as_ref().map_or(0, Vec::len)
        );

        Ok(recommendations)
    }
}

/// A blank primary title is passed through; the roadmap goal is then empty.
/// Returns whether the warning fired.
fn warn_on_untitled_primary(recommendations: &Recommendations) -> bool {
    let untitled = recommendations.career_paths.primary.title.trim().is_empty();
    if untitled {
        warn!("Advisor returned a primary career path without a title");
    }
    untitled
}
