use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Domain a skill belongs to. Fixed set; stored as the plain variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    Programming,
    Design,
    Marketing,
    Language,
    Music,
    Art,
    Writing,
    Business,
    Other,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 9] = [
        SkillCategory::Programming,
        SkillCategory::Design,
        SkillCategory::Marketing,
        SkillCategory::Language,
        SkillCategory::Music,
        SkillCategory::Art,
        SkillCategory::Writing,
        SkillCategory::Business,
        SkillCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Programming => "Programming",
            SkillCategory::Design => "Design",
            SkillCategory::Marketing => "Marketing",
            SkillCategory::Language => "Language",
            SkillCategory::Music => "Music",
            SkillCategory::Art => "Art",
            SkillCategory::Writing => "Writing",
            SkillCategory::Business => "Business",
            SkillCategory::Other => "Other",
        }
    }

    /// Parse a category name, case-insensitively.
    pub fn parse(value: &str) -> Option<SkillCategory> {
        let lower = value.to_lowercase();
        SkillCategory::ALL.iter().copied().find(|c| c.as_str().to_lowercase() == lower)
    }
}

impl std::fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Self-reported proficiency for an offered or wanted skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

/// A single skill entry inside a profile's offered or wanted list.
///
/// Ids are unique within their owning list only, not globally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category: SkillCategory,
    pub level: SkillLevel,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A user document as stored in the directory.
///
/// Field names serialize in camelCase so directory files round-trip the
/// backend's document shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub display_name: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    pub location: String,
    pub timezone: String,
    pub skills_offered: Vec<Skill>,
    pub skills_wanted: Vec<Skill>,
    pub rating: f64,
    pub total_swaps: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_online: bool,
    pub last_seen: DateTime<Utc>,
}
