//! Local Filter: instant, case-insensitive substring search over the directory.

use crate::models::Profile;

/// Returns every profile whose name, headline, any skill, or university contains
/// `query` (case-insensitive), in original order.
///
/// A blank query returns the full list unchanged.
pub fn filter_profiles(profiles: &[Profile], query: &str) -> Vec<Profile> {
    if query.trim().is_empty() {
        return profiles.to_vec();
    }

    let needle = query.to_lowercase();
    profiles
        .iter()
        .filter(|p| matches_query(p, &needle))
        .cloned()
        .collect()
}

/// `needle` must already be lower-cased.
fn matches_query(profile: &Profile, needle: &str) -> bool {
    profile.name.to_lowercase().contains(needle)
        || profile.headline.to_lowercase().contains(needle)
        || profile
            .skills
            .iter()
            .any(|skill| skill.to_lowercase().contains(needle))
        || profile.university.to_lowercase().contains(needle)
}
