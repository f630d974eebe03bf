//! File-backed directory: load/save profiles with atomic writes

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;

use super::store::{DIRECTORY_PAGE_SIZE, UserDirectory};
use crate::error::BackendError;
use crate::models::UserProfile;

const PROFILES_FILENAME: &str = "profiles.json";

/// Directory backed by a single JSON file of profile documents.
#[derive(Debug, Clone)]
pub struct JsonDirectory {
    path: PathBuf,
}

impl JsonDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open the directory at its platform-default location
    /// (`<data dir>/skillswap/profiles.json`).
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(default_data_dir()?.join(PROFILES_FILENAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every profile from the backing file. A missing file reads as an
    /// empty directory.
    pub fn load_profiles(&self) -> Result<Vec<UserProfile>, BackendError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "profile file missing, empty directory");
            return Ok(Vec::new());
        }
        let json = fs::read_to_string(&self.path)?;
        let profiles: Vec<UserProfile> = serde_json::from_str(&json)?;
        Ok(profiles)
    }

    /// Save profiles atomically (temp file + rename), creating the parent
    /// directory if missing.
    pub fn save_profiles(&self, profiles: &[UserProfile]) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent).context("Failed to create directory data dir")?;
        }

        let json =
            serde_json::to_string_pretty(profiles).context("Failed to serialize profiles")?;
        let temp = self.path.with_extension("json.tmp");
        fs::write(&temp, json).context("Failed to write profiles temp file")?;
        fs::rename(&temp, &self.path).context("Failed to rename profiles temp file")?;

        Ok(())
    }
}

#[async_trait]
impl UserDirectory for JsonDirectory {
    async fn query(&self) -> Result<Vec<UserProfile>, BackendError> {
        let mut profiles = self.load_profiles()?;
        profiles.sort_by(|a, b| a.display_name.cmp(&b.display_name));
        profiles.truncate(DIRECTORY_PAGE_SIZE);
        Ok(profiles)
    }

    async fn get(&self, user_id: &str) -> Result<Option<UserProfile>, BackendError> {
        let profiles = self.load_profiles()?;
        Ok(profiles.into_iter().find(|p| p.id == user_id))
    }
}

/// Platform-specific data directory for skillswap state.
pub fn default_data_dir() -> Result<PathBuf> {
    let data_base = dirs::data_dir().context("Failed to get platform data directory")?;
    Ok(data_base.join("skillswap"))
}
