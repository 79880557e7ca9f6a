//! Search session state machine.
//!
//! All view state of the discover screen lives in `SearchSession` and changes
//! only through `SessionEvent`s. `apply` is synchronous and deterministic, so a
//! recorded event list can be replayed to reproduce any state.
//!
//! Overlapping searches are ordered by a generation counter: each submission
//! bumps it, and results are applied only when their generation is the latest.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::directory::resolver::{resolve_profile, RecordRef};
use crate::models::{Profile, Recommendation};

/// Which result list the screen shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultsTab {
    /// Local Filter output ("Public Directory").
    #[default]
    All,
    /// AI recommendations.
    Ai,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchSession {
    pub active_tab: ResultsTab,
    pub search_query: String,
    pub is_searching: bool,
    pub recommendations: Vec<Recommendation>,
    /// Generation of the latest issued search. 0 = none issued yet.
    pub generation: u64,
    pub selected_profile_id: Option<String>,
    /// Set when the latest search failed; cleared by the next submission.
    pub last_search_failed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    QueryChanged {
        query: String,
    },
    SearchSubmitted,
    ResultsReceived {
        generation: u64,
        results: Vec<Recommendation>,
    },
    ResultsFailed {
        generation: u64,
    },
    TabSelected {
        tab: ResultsTab,
    },
    DetailOpened {
        record: RecordRef,
    },
    DetailClosed,
}

/// Work the caller must perform after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Run the Recommendation Requester and feed its outcome back as
    /// `ResultsReceived` / `ResultsFailed` with this generation.
    IssueRequest { generation: u64, query: String },
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one event. `profiles` is the directory used to resolve detail views.
    pub fn apply(&mut self, event: SessionEvent, profiles: &[Profile]) -> Effect {
        match event {
            SessionEvent::QueryChanged { query } => {
                self.search_query = query;
                Effect::None
            }
            SessionEvent::SearchSubmitted => self.submit(),
            SessionEvent::ResultsReceived {
                generation,
                results,
            } => {
                if self.is_stale(generation) {
                    return Effect::None;
                }
                self.recommendations = results;
                self.is_searching = false;
                self.last_search_failed = false;
                Effect::None
            }
            SessionEvent::ResultsFailed { generation } => {
                if self.is_stale(generation) {
                    return Effect::None;
                }
                self.recommendations.clear();
                self.is_searching = false;
                self.last_search_failed = true;
                Effect::None
            }
            SessionEvent::TabSelected { tab } => {
                self.active_tab = tab;
                Effect::None
            }
            SessionEvent::DetailOpened { record } => {
                if let Some(profile) = resolve_profile(profiles, &record) {
                    self.selected_profile_id = Some(profile.id.clone());
                }
                Effect::None
            }
            SessionEvent::DetailClosed => {
                self.selected_profile_id = None;
                Effect::None
            }
        }
    }

    fn submit(&mut self) -> Effect {
        // Any submission supersedes whatever is still in flight.
        self.generation += 1;

        if self.search_query.trim().is_empty() {
            self.recommendations.clear();
            self.active_tab = ResultsTab::All;
            self.is_searching = false;
            self.last_search_failed = false;
            return Effect::None;
        }

        self.active_tab = ResultsTab::Ai;
        self.is_searching = true;
        self.last_search_failed = false;
        Effect::IssueRequest {
            generation: self.generation,
            query: self.search_query.clone(),
        }
    }

    fn is_stale(&self, generation: u64) -> bool {
        let stale = generation != self.generation;
        if stale {
            debug!(
                generation,
                latest = self.generation,
                "Discarding stale search results"
            );
        }
        stale
    }
}

/// Folds `events` over a fresh session, collecting the effects in order.
pub fn replay(
    events: impl IntoIterator<Item = SessionEvent>,
    profiles: &[Profile],
) -> (SearchSession, Vec<Effect>) {
    let mut session = SearchSession::new();
    let effects = events
        .into_iter()
        .map(|event| session.apply(event, profiles))
        .collect();
    (session, effects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::catalog::mock_students;
    use crate::recommend::requester::stubs::to_recommendation;

    fn query(q: &str) -> SessionEvent {
        SessionEvent::QueryChanged {
            query: q.to_string(),
        }
    }

    fn recs(profiles: &[Profile], names: &[&str]) -> Vec<Recommendation> {
        profiles
            .iter()
            .filter(|p| names.contains(&p.name.as_str()))
            .map(|p| to_recommendation(p, "fit"))
            .collect()
    }

    #[test]
    fn test_new_session_defaults() {
        let session = SearchSession::new();
        assert_eq!(session.active_tab, ResultsTab::All);
        assert_eq!(session.generation, 0);
        assert!(!session.is_searching);
        assert!(session.recommendations.is_empty());
    }

    #[test]
    fn test_submit_issues_request_and_switches_tab() {
        let profiles = mock_students();
        let (session, effects) = replay(
            [query("Flutter dev"), SessionEvent::SearchSubmitted],
            &profiles,
        );
        assert_eq!(
            effects,
            vec![
                Effect::None,
                Effect::IssueRequest {
                    generation: 1,
                    query: "Flutter dev".to_string()
                }
            ]
        );
        assert_eq!(session.active_tab, ResultsTab::Ai);
        assert!(session.is_searching);
    }

    #[test]
    fn test_empty_submit_issues_nothing_and_clears_results() {
        let profiles = mock_students();
        let (session, effects) = replay(
            [
                query("ML"),
                SessionEvent::SearchSubmitted,
                SessionEvent::ResultsReceived {
                    generation: 1,
                    results: recs(&profiles, &["Priya Iyer"]),
                },
                query("   "),
                SessionEvent::SearchSubmitted,
            ],
            &profiles,
        );
        assert_eq!(effects[4], Effect::None);
        assert!(session.recommendations.is_empty());
        assert_eq!(session.active_tab, ResultsTab::All);
        assert!(!session.is_searching);
    }

    #[test]
    fn test_results_received_applies_latest_generation() {
        let profiles = mock_students();
        let (session, _) = replay(
            [
                query("Java"),
                SessionEvent::SearchSubmitted,
                SessionEvent::ResultsReceived {
                    generation: 1,
                    results: recs(&profiles, &["Ananya Gupta"]),
                },
            ],
            &profiles,
        );
        assert!(!session.is_searching);
        assert_eq!(session.recommendations.len(), 1);
        assert_eq!(session.recommendations[0].name, "Ananya Gupta");
    }

    #[test]
    fn test_stale_results_are_discarded() {
        let profiles = mock_students();
        let (session, _) = replay(
            [
                query("Java"),
                SessionEvent::SearchSubmitted,
                query("Flutter"),
                SessionEvent::SearchSubmitted,
                // latest resolves first
                SessionEvent::ResultsReceived {
                    generation: 2,
                    results: recs(&profiles, &["Vikram Singh"]),
                },
                // older request resolves late and must not clobber
                SessionEvent::ResultsReceived {
                    generation: 1,
                    results: recs(&profiles, &["Ananya Gupta"]),
                },
            ],
            &profiles,
        );
        assert_eq!(session.generation, 2);
        assert_eq!(session.recommendations[0].name, "Vikram Singh");
    }

    #[test]
    fn test_stale_result_does_not_end_searching() {
        let profiles = mock_students();
        let (session, _) = replay(
            [
                query("Java"),
                SessionEvent::SearchSubmitted,
                SessionEvent::SearchSubmitted,
                SessionEvent::ResultsReceived {
                    generation: 1,
                    results: vec![],
                },
            ],
            &profiles,
        );
        assert!(session.is_searching);
    }

    #[test]
    fn test_results_after_empty_submit_are_stale() {
        let profiles = mock_students();
        let (session, _) = replay(
            [
                query("Java"),
                SessionEvent::SearchSubmitted,
                query(""),
                SessionEvent::SearchSubmitted,
                SessionEvent::ResultsReceived {
                    generation: 1,
                    results: recs(&profiles, &["Ananya Gupta"]),
                },
            ],
            &profiles,
        );
        assert!(session.recommendations.is_empty());
    }

    #[test]
    fn test_failure_clears_results_and_flags() {
        let profiles = mock_students();
        let (session, _) = replay(
            [
                query("Java"),
                SessionEvent::SearchSubmitted,
                SessionEvent::ResultsReceived {
                    generation: 1,
                    results: recs(&profiles, &["Ananya Gupta"]),
                },
                SessionEvent::SearchSubmitted,
                SessionEvent::ResultsFailed { generation: 2 },
            ],
            &profiles,
        );
        assert!(session.recommendations.is_empty());
        assert!(session.last_search_failed);
        assert!(!session.is_searching);

        let mut session = session;
        session.apply(SessionEvent::SearchSubmitted, &profiles);
        assert!(!session.last_search_failed);
    }

    #[test]
    fn test_detail_opened_resolves_by_exact_name() {
        let profiles = mock_students();
        let mut session = SearchSession::new();
        session.apply(
            SessionEvent::DetailOpened {
                record: RecordRef {
                    id: None,
                    name: "arjun sharma".to_string(),
                },
            },
            &profiles,
        );
        assert_eq!(session.selected_profile_id, None);

        session.apply(
            SessionEvent::DetailOpened {
                record: RecordRef {
                    id: None,
                    name: "Arjun Sharma".to_string(),
                },
            },
            &profiles,
        );
        assert_eq!(session.selected_profile_id.as_deref(), Some("1"));

        session.apply(SessionEvent::DetailClosed, &profiles);
        assert_eq!(session.selected_profile_id, None);
    }

    #[test]
    fn test_query_change_keeps_recommendations() {
        let profiles = mock_students();
        let (session, _) = replay(
            [
                query("Java"),
                SessionEvent::SearchSubmitted,
                SessionEvent::ResultsReceived {
                    generation: 1,
                    results: recs(&profiles, &["Ananya Gupta"]),
                },
                query("Figma"),
                SessionEvent::TabSelected {
                    tab: ResultsTab::All,
                },
            ],
            &profiles,
        );
        assert_eq!(session.search_query, "Figma");
        assert_eq!(session.recommendations.len(), 1);
        assert_eq!(session.active_tab, ResultsTab::All);
    }

    #[test]
    fn test_replay_is_deterministic() {
        let profiles = mock_students();
        let events = vec![
            query("Python"),
            SessionEvent::SearchSubmitted,
            SessionEvent::ResultsReceived {
                generation: 1,
                results: recs(&profiles, &["Arjun Sharma"]),
            },
            SessionEvent::TabSelected {
                tab: ResultsTab::All,
            },
        ];
        assert_eq!(
            replay(events.clone(), &profiles),
            replay(events, &profiles)
        );
    }

    #[test]
    fn test_session_and_events_serialize() {
        let event: SessionEvent =
            serde_json::from_str(r#"{"type": "tab_selected", "tab": "ai"}"#).unwrap();
        assert_eq!(event, SessionEvent::TabSelected { tab: ResultsTab::Ai });

        let session = SearchSession::new();
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["active_tab"], "all");
        let back: SearchSession = serde_json::from_value(json).unwrap();
        assert_eq!(back, session);
    }
}
