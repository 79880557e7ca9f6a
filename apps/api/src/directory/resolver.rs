//! Detail-View Resolver: maps a directory card or an AI recommendation back to
//! the full profile it describes.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Profile, Recommendation};

/// Anything the UI can click to open a detail view.
pub trait ProfileRef {
    /// Stable profile id, when the record carries one.
    fn profile_id(&self) -> Option<&str>;
    fn display_name(&self) -> &str;
}

impl ProfileRef for Profile {
    fn profile_id(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl ProfileRef for Recommendation {
    fn profile_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

/// Minimal record shape accepted over the wire by the session API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordRef {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

impl ProfileRef for RecordRef {
    fn profile_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}

/// Looks up the full profile for `record`.
///
/// A known id wins. Otherwise falls back to exact, case-sensitive name equality.
/// No fuzzy matching: a miss returns `None`.
pub fn resolve_profile<'a, R: ProfileRef + ?Sized>(
    profiles: &'a [Profile],
    record: &R,
) -> Option<&'a Profile> {
    if let Some(id) = record.profile_id() {
        if let Some(found) = profiles.iter().find(|p| p.id == id) {
            return Some(found);
        }
    }

    let found = profiles.iter().find(|p| p.name == record.display_name());
    if found.is_none() {
        debug!(
            name = record.display_name(),
            id = record.profile_id(),
            "No profile matches record; detail view not shown"
        );
    }
    found
}
