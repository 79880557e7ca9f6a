pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::directory::handlers as directory;
use crate::recommend::handlers as recommend;
use crate::session::handlers as session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Directory
        .route("/api/v1/profiles", get(directory::handle_list_profiles))
        .route("/api/v1/profiles/:id", get(directory::handle_get_profile))
        .route("/api/v1/universities", get(directory::handle_catalog))
        // AI
        .route("/api/v1/recommendations", post(recommend::handle_recommend))
        .route(
            "/api/v1/summaries/normalize",
            post(recommend::handle_normalize_summary),
        )
        // Sessions
        .route("/api/v1/sessions", post(session::handle_create_session))
        .route("/api/v1/sessions/:id", get(session::handle_get_session))
        .route(
            "/api/v1/sessions/:id/events",
            post(session::handle_session_event),
        )
        .with_state(state)
}
