//! Axum route handlers for search sessions.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use uuid::Uuid;

use crate::directory::filter::filter_profiles;
use crate::directory::resolver::RecordRef;
use crate::errors::AppError;
use crate::models::Profile;
use crate::recommend::requester::{request_matches, MatchService};
use crate::session::machine::{Effect, ResultsTab, SessionEvent};
use crate::session::store::{SessionEntry, SessionStore};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Events a client may send. Result events are produced by the server only.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientEvent {
    QueryChanged { query: String },
    SearchSubmitted,
    TabSelected { tab: ResultsTab },
    DetailOpened { record: RecordRef },
    DetailClosed,
}

impl From<ClientEvent> for SessionEvent {
    fn from(event: ClientEvent) -> Self {
        match event {
            ClientEvent::QueryChanged { query } => SessionEvent::QueryChanged { query },
            ClientEvent::SearchSubmitted => SessionEvent::SearchSubmitted,
            ClientEvent::TabSelected { tab } => SessionEvent::TabSelected { tab },
            ClientEvent::DetailOpened { record } => SessionEvent::DetailOpened { record },
            ClientEvent::DetailClosed => SessionEvent::DetailClosed,
        }
    }
}

/// Session state plus the views derived from it.
#[derive(Debug, Serialize)]
pub struct SessionView {
    #[serde(flatten)]
    pub entry: SessionEntry,
    pub directory_count: usize,
    pub directory: Vec<Profile>,
    pub selected_profile: Option<Profile>,
}

impl SessionView {
    fn build(entry: SessionEntry, profiles: &[Profile]) -> Self {
        let directory = filter_profiles(profiles, &entry.session.search_query);
        let selected_profile = entry
            .session
            .selected_profile_id
            .as_deref()
            .and_then(|id| profiles.iter().find(|p| p.id == id))
            .cloned();
        Self {
            entry,
            directory_count: directory.len(),
            directory,
            selected_profile,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionView>) {
    let entry = state.sessions.create().await;
    (
        StatusCode::CREATED,
        Json(SessionView::build(entry, &state.profiles)),
    )
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let entry = state.sessions.get(id).await?;
    Ok(Json(SessionView::build(entry, &state.profiles)))
}

/// POST /api/v1/sessions/:id/events
///
/// Applies the event and returns the new state immediately. A submitted search
/// runs in the background; poll the session to observe its results.
pub async fn handle_session_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(event): Json<ClientEvent>,
) -> Result<Json<SessionView>, AppError> {
    let (entry, effect) = state
        .sessions
        .apply(id, event.into(), &state.profiles)
        .await?;

    if let Effect::IssueRequest { generation, query } = effect {
        tokio::spawn(run_search(
            state.sessions.clone(),
            state.matcher.clone(),
            state.profiles.clone(),
            id,
            generation,
            query,
        ));
    }

    Ok(Json(SessionView::build(entry, &state.profiles)))
}

/// Runs one search and feeds its outcome back into the session.
/// Stale generations are dropped by the state machine.
pub async fn run_search(
    sessions: SessionStore,
    matcher: Arc<dyn MatchService>,
    profiles: Arc<Vec<Profile>>,
    id: Uuid,
    generation: u64,
    query: String,
) {
    let event = match request_matches(matcher.as_ref(), &query, &profiles).await {
        Ok(results) => SessionEvent::ResultsReceived {
            generation,
            results,
        },
        Err(e) => {
            error!(session_id = %id, generation, "AI match error: {e}");
            SessionEvent::ResultsFailed { generation }
        }
    };

    if let Err(e) = sessions.apply(id, event, &profiles).await {
        warn!(session_id = %id, "Dropping search results: {e}");
    }
}
