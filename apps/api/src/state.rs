use std::sync::Arc;

use crate::llm_client::LlmClient;
use crate::models::Profile;
use crate::recommend::requester::MatchService;
use crate::session::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// The student directory. Immutable for the process lifetime.
    pub profiles: Arc<Vec<Profile>>,
    /// Pluggable ranking backend. Default: GeminiMatcher.
    pub matcher: Arc<dyn MatchService>,
    pub sessions: SessionStore,
}
