//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::path::PathBuf;

use chrono::{TimeZone, Utc};
use skillswap::directory::JsonDirectory;
use skillswap::models::{Skill, SkillCategory, SkillLevel, UserProfile};
use tempfile::TempDir;

/// Build a skill with sensible defaults for tests.
pub fn skill(name: &str, category: SkillCategory) -> Skill {
    Skill {
        id: format!("skill-{}", name.to_lowercase().replace(' ', "-")),
        name: name.to_string(),
        category,
        level: SkillLevel::Intermediate,
        description: String::new(),
        tags: Vec::new(),
    }
}

pub fn skill_with_description(name: &str, category: SkillCategory, description: &str) -> Skill {
    Skill { description: description.to_string(), ..skill(name, category) }
}

/// Fluent builder for test profiles.
pub struct ProfileBuilder {
    profile: UserProfile,
}

impl ProfileBuilder {
    pub fn new(id: &str, display_name: &str) -> Self {
        let epoch = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        Self {
            profile: UserProfile {
                id: id.to_string(),
                email: format!("{id}@example.com"),
                display_name: display_name.to_string(),
                photo_url: None,
                bio: None,
                location: String::new(),
                timezone: "UTC".to_string(),
                skills_offered: Vec::new(),
                skills_wanted: Vec::new(),
                rating: 0.0,
                total_swaps: 0,
                created_at: epoch,
                updated_at: epoch,
                is_online: false,
                last_seen: epoch,
            },
        }
    }

    pub fn location(mut self, location: &str) -> Self {
        self.profile.location = location.to_string();
        self
    }

    pub fn bio(mut self, bio: &str) -> Self {
        self.profile.bio = Some(bio.to_string());
        self
    }

    pub fn rating(mut self, rating: f64, total_swaps: u32) -> Self {
        self.profile.rating = rating;
        self.profile.total_swaps = total_swaps;
        self
    }

    pub fn offers(mut self, skill: Skill) -> Self {
        self.profile.skills_offered.push(skill);
        self
    }

    pub fn wants(mut self, skill: Skill) -> Self {
        self.profile.skills_wanted.push(skill);
        self
    }

    pub fn build(self) -> UserProfile {
        self.profile
    }
}

/// Write the given profiles to a fresh temp directory file and return both;
/// the `TempDir` must stay alive for the path to remain valid.
pub fn write_directory(profiles: &[UserProfile]) -> (TempDir, PathBuf) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let path = temp.path().join("profiles.json");
    JsonDirectory::new(&path).save_profiles(profiles).expect("Failed to write profiles");
    (temp, path)
}
