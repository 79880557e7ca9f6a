//! Recommendation Requester: pluggable, trait-based ranking of the directory
//! against a free-text query.
//!
//! Default backend: `GeminiMatcher` (one `generateContent` call per query).
//! `AppState` holds an `Arc<dyn MatchService>`; tests swap in stubs.
//!
//! Failures never reach the caller of `get_intelligent_matches`: they are logged
//! and collapse to an empty list, so "no matches" and "request failed" look the
//! same. `request_matches` keeps the error for callers that need to tell them
//! apart (the session state machine).

use async_trait::async_trait;
use serde::Serialize;
use tracing::{error, info, warn};

use crate::directory::resolver::resolve_profile;
use crate::llm_client::{LlmClient, LlmError};
use crate::models::{Profile, Recommendation};
use crate::recommend::prompts::{
    match_system_instruction, recommendation_schema, MATCH_PROMPT_TEMPLATE,
};

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// A ranking backend. Implement this to swap the external service without
/// touching handlers or the session machine.
#[async_trait]
pub trait MatchService: Send + Sync {
    /// Issues exactly one ranking request. Ordering of the result is the
    /// backend's relevance judgment.
    async fn rank(
        &self,
        query: &str,
        profiles: &[Profile],
    ) -> Result<Vec<Recommendation>, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// GeminiMatcher, the production backend
// ────────────────────────────────────────────────────────────────────────────

pub struct GeminiMatcher(pub LlmClient);

#[async_trait]
impl MatchService for GeminiMatcher {
    async fn rank(
        &self,
        query: &str,
        profiles: &[Profile],
    ) -> Result<Vec<Recommendation>, LlmError> {
        let prompt = build_match_prompt(query, profiles)?;
        self.0
            .call_json::<Vec<Recommendation>>(
                &prompt,
                &match_system_instruction(),
                &recommendation_schema(),
            )
            .await
    }
}

/// Reduced view of a profile sent as model context.
#[derive(Debug, Serialize)]
pub struct ProfileContext<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub headline: &'a str,
    pub skills: &'a [String],
    pub experience_level: &'a str,
    pub projects: Vec<&'a str>,
    pub availability: &'a str,
}

impl<'a> From<&'a Profile> for ProfileContext<'a> {
    fn from(p: &'a Profile) -> Self {
        Self {
            id: &p.id,
            name: &p.name,
            headline: &p.headline,
            skills: &p.skills,
            experience_level: p.experience_level.as_str(),
            projects: p.projects.iter().map(|proj| proj.title.as_str()).collect(),
            availability: p.availability.as_str(),
        }
    }
}

/// Builds the user turn: the query plus the JSON projection of every profile.
pub fn build_match_prompt(query: &str, profiles: &[Profile]) -> Result<String, LlmError> {
    let context: Vec<ProfileContext<'_>> = profiles.iter().map(ProfileContext::from).collect();
    let profiles_json = serde_json::to_string(&context)?;

    Ok(MATCH_PROMPT_TEMPLATE
        .replace("{profiles_json}", &profiles_json)
        .replace("{query}", query))
}

// ────────────────────────────────────────────────────────────────────────────
// Entry points
// ────────────────────────────────────────────────────────────────────────────

/// Fallible form. A blank query returns `Ok(vec![])` without a request.
pub async fn request_matches(
    service: &dyn MatchService,
    query: &str,
    profiles: &[Profile],
) -> Result<Vec<Recommendation>, LlmError> {
    if query.trim().is_empty() {
        return Ok(Vec::new());
    }

    let recommendations = service.rank(query, profiles).await?;

    let ungrounded = recommendations
        .iter()
        .filter(|r| resolve_profile(profiles, *r).is_none())
        .count();
    if ungrounded > 0 {
        warn!(
            ungrounded,
            total = recommendations.len(),
            "Recommendations reference students outside the directory"
        );
    }

    info!(
        query = query,
        results = recommendations.len(),
        "AI match completed"
    );
    Ok(recommendations)
}

/// Ranks `profiles` for `query`. Every failure degrades to an empty list.
pub async fn get_intelligent_matches(
    service: &dyn MatchService,
    query: &str,
    profiles: &[Profile],
) -> Vec<Recommendation> {
    match request_matches(service, query, profiles).await {
        Ok(recommendations) => recommendations,
        Err(e) => {
            error!("AI match error: {e}");
            Vec::new()
        }
    }
}
