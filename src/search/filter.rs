use super::criteria::SearchFilters;
use crate::models::UserProfile;

/// Filter one page of directory results against the supplied criteria.
///
/// - The requesting user's own record is always dropped.
/// - Supplied criteria combine with AND; empty criteria impose nothing.
/// - The relative order of the input batch is preserved.
///
/// Never fails: absent bios, empty locations, and empty skill lists simply
/// count as "no match" for their respective checks.
pub fn filter_candidates(
    self_id: &str,
    candidates: Vec<UserProfile>,
    filters: &SearchFilters,
) -> Vec<UserProfile> {
    candidates
        .into_iter()
        .filter(|candidate| candidate.id != self_id)
        .filter(|candidate| matches_filters(candidate, filters))
        .collect()
}

fn matches_filters(candidate: &UserProfile, filters: &SearchFilters) -> bool {
    matches_term(candidate, &filters.term)
        && matches_location(candidate, &filters.location)
        && matches_category(candidate, filters)
}

/// Case-insensitive substring match against display name, bio, or any offered
/// skill's name or description.
fn matches_term(candidate: &UserProfile, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();

    let in_name = candidate.display_name.to_lowercase().contains(&term);
    let in_bio = candidate.bio.as_ref().is_some_and(|bio| bio.to_lowercase().contains(&term));
    let in_skills = candidate.skills_offered.iter().any(|skill| {
        skill.name.to_lowercase().contains(&term)
            || skill.description.to_lowercase().contains(&term)
    });

    in_name || in_bio || in_skills
}

/// Case-insensitive substring match; an empty candidate location never matches
/// a non-empty filter.
fn matches_location(candidate: &UserProfile, location: &str) -> bool {
    if location.is_empty() {
        return true;
    }
    candidate.location.to_lowercase().contains(&location.to_lowercase())
}

/// At least one offered skill must fall in one of the requested categories.
fn matches_category(candidate: &UserProfile, filters: &SearchFilters) -> bool {
    if filters.categories.is_empty() {
        return true;
    }
    candidate.skills_offered.iter().any(|skill| filters.categories.contains(&skill.category))
}
