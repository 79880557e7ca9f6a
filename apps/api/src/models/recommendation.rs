use serde::{Deserialize, Serialize};

/// A ranked match record produced by the generative-language service.
///
/// Mirrors a subset of `Profile` with free-text tier/availability and project
/// titles only. `id` echoes the profile id sent in the request; older or
/// misbehaving responses may omit it, so resolution falls back to the name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub headline: String,
    pub skills: Vec<String>,
    pub experience_level: String,
    pub projects: Vec<String>,
    pub availability: String,
    pub match_reason: String,
}
