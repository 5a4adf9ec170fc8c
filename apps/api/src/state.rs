use std::sync::Arc;

use crate::advisor::gateway::RecommendationGateway;
use crate::chat::service::ChatService;
use crate::config::Config;
use crate::session::registry::SessionRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Recommendation backend. Default: GeminiRecommendationGateway.
    pub gateway: Arc<dyn RecommendationGateway>,
    /// Chat backend. Default: GeminiChatService.
    pub chat: Arc<dyn ChatService>,
    pub sessions: SessionRegistry,
}
