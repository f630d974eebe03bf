use crate::models::SkillCategory;

/// Search criteria for one directory query. Built per invocation and
/// discarded; never persisted.
///
/// Empty fields impose no constraint. `categories` is treated as a set; the
/// `Vec` keeps the order values were supplied in for display purposes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    /// Free-text term matched against name, bio, and offered skills.
    pub term: String,
    /// Candidate must offer at least one skill in one of these categories.
    pub categories: Vec<SkillCategory>,
    /// Substring matched against the candidate's location.
    pub location: String,
}

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no criterion is set, i.e. the filter passes everything.
    pub fn is_empty(&self) -> bool {
        self.term.is_empty() && self.categories.is_empty() && self.location.is_empty()
    }
}
