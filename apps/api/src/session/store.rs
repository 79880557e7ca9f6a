use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::Profile;
use crate::session::machine::{Effect, SearchSession, SessionEvent};

#[derive(Debug, Clone, Serialize)]
pub struct SessionEntry {
    pub id: Uuid,
    #[serde(flatten)]
    pub session: SearchSession,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Idle time after which a session is evicted.
pub const DEFAULT_SESSION_TTL_MINS: i64 = 120;

/// In-memory session table. Sessions idle longer than the TTL are evicted
/// whenever a new one is created.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, SessionEntry>>>,
    ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_ttl(Duration::minutes(DEFAULT_SESSION_TTL_MINS))
    }
}

impl SessionStore {
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            inner: Arc::default(),
            ttl,
        }
    }

    pub async fn create(&self) -> SessionEntry {
        let now = Utc::now();
        let entry = SessionEntry {
            id: Uuid::new_v4(),
            session: SearchSession::new(),
            created_at: now,
            updated_at: now,
        };

        let mut sessions = self.inner.write().await;
        let before = sessions.len();
        let cutoff = now - self.ttl;
        sessions.retain(|_, e| e.updated_at >= cutoff);
        let evicted = before - sessions.len();
        if evicted > 0 {
            debug!(evicted, remaining = sessions.len(), "Evicted idle sessions");
        }

        sessions.insert(entry.id, entry.clone());
        entry
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn get(&self, id: Uuid) -> Result<SessionEntry, AppError> {
        self.inner
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
    }

    /// Applies `event` under the write lock and returns the updated entry with
    /// the effect the caller must run.
    pub async fn apply(
        &self,
        id: Uuid,
        event: SessionEvent,
        profiles: &[Profile],
    ) -> Result<(SessionEntry, Effect), AppError> {
        let mut sessions = self.inner.write().await;
        let entry = sessions
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;

        let effect = entry.session.apply(event, profiles);
        entry.updated_at = Utc::now();

        Ok((entry.clone(), effect))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::catalog::mock_students;

    #[tokio::test]
    async fn test_create_then_get() {
        let store = SessionStore::default();
        let created = store.create().await;
        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(fetched.session, SearchSession::new());
        assert_eq!(fetched.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let store = SessionStore::default();
        assert!(matches!(
            store.get(Uuid::new_v4()).await,
            Err(AppError::NotFound(_))
        ));
        let result = store
            .apply(Uuid::new_v4(), SessionEvent::DetailClosed, &[])
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_apply_persists_state() {
        let store = SessionStore::default();
        let profiles = mock_students();
        let id = store.create().await.id;

        store
            .apply(
                id,
                SessionEvent::QueryChanged {
                    query: "Docker".to_string(),
                },
                &profiles,
            )
            .await
            .unwrap();
        let (entry, effect) = store
            .apply(id, SessionEvent::SearchSubmitted, &profiles)
            .await
            .unwrap();

        assert_eq!(
            effect,
            Effect::IssueRequest {
                generation: 1,
                query: "Docker".to_string()
            }
        );
        assert_eq!(store.get(id).await.unwrap().session, entry.session);
        assert!(entry.updated_at >= entry.created_at);
    }

    async fn age(store: &SessionStore, id: Uuid, by: Duration) {
        let mut sessions = store.inner.write().await;
        let entry = sessions.get_mut(&id).unwrap();
        entry.updated_at = entry.updated_at - by;
    }

    #[tokio::test]
    async fn test_idle_sessions_are_evicted_on_create() {
        let store = SessionStore::with_ttl(Duration::minutes(30));
        let stale = store.create().await.id;
        let fresh = store.create().await.id;
        age(&store, stale, Duration::minutes(31)).await;

        let newest = store.create().await.id;

        assert!(matches!(store.get(stale).await, Err(AppError::NotFound(_))));
        assert!(store.get(fresh).await.is_ok());
        assert!(store.get(newest).await.is_ok());
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_activity_keeps_session_alive() {
        let store = SessionStore::with_ttl(Duration::minutes(30));
        let id = store.create().await.id;
        age(&store, id, Duration::minutes(31)).await;

        // any event refreshes updated_at
        store
            .apply(id, SessionEvent::DetailClosed, &[])
            .await
            .unwrap();
        store.create().await;

        assert!(store.get(id).await.is_ok());
    }
}
