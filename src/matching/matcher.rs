use crate::models::{Skill, UserProfile};

/// Which side of the exchange a hint describes, from the requesting user's
/// point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchDirection {
    /// The counterpart offers something the requesting user wants.
    Learn,
    /// The requesting user offers something the counterpart wants.
    Teach,
}

impl std::fmt::Display for MatchDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            MatchDirection::Learn => "learn",
            MatchDirection::Teach => "teach",
        })
    }
}

/// One reciprocal skill-exchange opportunity between two users.
///
/// Derived fresh on every call; never persisted. Consumers typically report
/// only the hint count, so duplicates are left in.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchHint {
    pub direction: MatchDirection,
    pub skill: Skill,
}

/// Compute all reciprocal skill-match opportunities between `me` and `other`.
///
/// Every (wanted, offered) pair is compared independently, so a single skill
/// can produce several hints; no deduplication or ordering is applied beyond
/// list iteration order. Empty skill lists yield no hints.
pub fn match_profiles(me: &UserProfile, other: &UserProfile) -> Vec<MatchHint> {
    let mut hints = Vec::new();

    for wanted in &me.skills_wanted {
        for offered in &other.skills_offered {
            if learn_match(wanted, offered) {
                hints.push(MatchHint { direction: MatchDirection::Learn, skill: offered.clone() });
            }
        }
    }

    for offered in &me.skills_offered {
        for wanted in &other.skills_wanted {
            if teach_match(offered, wanted) {
                hints.push(MatchHint { direction: MatchDirection::Teach, skill: offered.clone() });
            }
        }
    }

    hints
}

// The name fallbacks are asymmetric legacy behavior: in both directions the
// requesting user's own skill name must contain the counterpart's name, never
// the reverse. Kept exactly as shipped; pinned by the asymmetry tests below.

/// Category match, or the offered name appears inside the wanted name.
fn learn_match(wanted: &Skill, offered: &Skill) -> bool {
    wanted.category == offered.category
        || wanted.name.to_lowercase().contains(&offered.name.to_lowercase())
}

/// Category match, or the wanted name appears inside the offered name.
fn teach_match(offered: &Skill, wanted: &Skill) -> bool {
    offered.category == wanted.category
        || offered.name.to_lowercase().contains(&wanted.name.to_lowercase())
}
